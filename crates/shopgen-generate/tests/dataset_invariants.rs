use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use shopgen_core::catalog::OPTION_ID_RANGE;
use shopgen_core::{SENTINEL, UNSHIPPED_DATE, round_currency};
use shopgen_generate::output::{CUSTOMERS_FILE, ORDER_LINES_FILE, ORDERS_FILE};
use shopgen_generate::{GenerateOptions, GenerationEngine};

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("shopgen_invariants_{label}_{}", uuid::Uuid::new_v4()));
    dir
}

fn read_rows(path: PathBuf) -> Vec<BTreeMap<String, String>> {
    let mut reader = csv::Reader::from_path(&path)
        .unwrap_or_else(|_| panic!("missing csv at {}", path.display()));
    reader
        .deserialize()
        .map(|row| row.expect("parse csv row"))
        .collect()
}

fn field<'a>(row: &'a BTreeMap<String, String>, name: &str) -> &'a str {
    row.get(name).map(String::as_str).expect("column present")
}

fn number(row: &BTreeMap<String, String>, name: &str) -> f64 {
    field(row, name).parse().expect("numeric column")
}

#[test]
fn written_tables_hold_invariants() {
    let options = GenerateOptions {
        out_dir: temp_out_dir("files"),
        customer_count: 300,
        order_count: 2500,
        ..GenerateOptions::default()
    };
    let result = GenerationEngine::new(options).run().expect("run generation");

    let customers = read_rows(result.out_dir.join(CUSTOMERS_FILE));
    assert_eq!(customers.len(), 300);
    for (idx, row) in customers.iter().enumerate() {
        assert_eq!(field(row, "customer_id"), (idx + 1).to_string());
    }

    let lines = read_rows(result.out_dir.join(ORDER_LINES_FILE));
    let mut sums: BTreeMap<String, f64> = BTreeMap::new();
    for (idx, row) in lines.iter().enumerate() {
        assert_eq!(field(row, "id"), (idx + 1).to_string());
        let option: u32 = field(row, "product_option_id").parse().expect("option id");
        assert!(OPTION_ID_RANGE.contains(&option));
        let quantity = number(row, "quantity");
        let unit_price = number(row, "unit_price");
        assert_eq!(number(row, "total_price"), round_currency(quantity * unit_price));
        *sums
            .entry(field(row, "order_id").to_string())
            .or_insert(0.0) += number(row, "total_price");
    }

    let orders = read_rows(result.out_dir.join(ORDERS_FILE));
    assert_eq!(orders.len(), 2500);
    let sentinel = UNSHIPPED_DATE.to_string();
    for row in &orders {
        let id = field(row, "id");
        let expected = sums.get(id).copied().map(round_currency).expect("order has lines");
        assert_eq!(number(row, "total_amount"), expected, "order {id}");

        for column in ["order_date", "due_date", "ship_date"] {
            let value = field(row, column);
            assert_eq!(value.len(), 10, "{column} {value}");
            NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("plain calendar date");
        }

        let shipped = matches!(field(row, "status"), "shipping" | "delivered");
        assert_eq!(field(row, "ship_date") != sentinel, shipped, "order {id}");

        let final_amount = number(row, "total_amount") + number(row, "shipping_fee")
            - number(row, "discount_amount");
        assert_eq!(number(row, "final_amount"), round_currency(final_amount));
        assert_eq!(field(row, "payment_method"), "cod");
    }
}

#[test]
fn in_memory_dataset_holds_invariants() {
    let options = GenerateOptions {
        customer_count: 100,
        order_count: 3000,
        seed: 2024,
        ..GenerateOptions::default()
    };
    let dataset = GenerationEngine::new(options).generate().expect("generate");

    let mut sums: BTreeMap<u32, f64> = BTreeMap::new();
    for item in &dataset.order_lines {
        assert_ne!(item.product_id, SENTINEL);
        assert_ne!(item.unit_price, SENTINEL);
        if item.product_option_id == 22 {
            assert_eq!((item.product_id, item.unit_price), (7, 46_000));
        }
        *sums.entry(item.order_id).or_insert(0.0) += item.total_price;
    }

    assert_eq!(sums.len(), dataset.orders.len());
    for order in &dataset.orders {
        assert_eq!(order.total_amount, round_currency(sums[&order.id]));
        assert!((1..=100).contains(&order.customer_id));
        assert_eq!(order.status.is_shipped(), order.ship_date != UNSHIPPED_DATE);
    }
}

#[test]
fn status_and_payment_are_independent_draws() {
    let dataset = GenerationEngine::new(GenerateOptions {
        order_count: 5000,
        ..GenerateOptions::default()
    })
    .generate()
    .expect("generate");

    let cancelled_but_paid = dataset.orders.iter().any(|order| {
        order.status == shopgen_core::OrderStatus::Cancelled
            && order.payment_status == shopgen_core::PaymentStatus::Paid
    });
    assert!(cancelled_but_paid);
}
