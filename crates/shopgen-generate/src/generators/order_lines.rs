use std::collections::BTreeMap;

use rand::Rng;

use shopgen_core::catalog::OPTION_ID_RANGE;
use shopgen_core::{OrderLineItem, round_currency, resolve_option};

/// Lines per order, drawn once per order.
const LINES_PER_ORDER: std::ops::RangeInclusive<usize> = 1..=4;
const QUANTITY_RANGE: std::ops::RangeInclusive<u32> = 1..=3;

/// Line items for a batch of orders.
#[derive(Debug, Clone)]
pub struct OrderLines {
    pub items: Vec<OrderLineItem>,
    /// Id the next line item would receive.
    pub next_id: u64,
}

/// Generate line items for orders `1..=order_count`.
///
/// Ids start at `first_id` and increase by one per line, order-major.
pub fn generate_order_lines<R: Rng + ?Sized>(
    order_count: u32,
    first_id: u64,
    rng: &mut R,
) -> OrderLines {
    let mut items = Vec::new();
    let mut next_id = first_id;

    for order_id in 1..=order_count {
        let lines = lines_for_order(order_id, next_id, rng);
        next_id += lines.len() as u64;
        items.extend(lines);
    }

    OrderLines { items, next_id }
}

fn lines_for_order<R: Rng + ?Sized>(
    order_id: u32,
    first_id: u64,
    rng: &mut R,
) -> Vec<OrderLineItem> {
    let count = rng.random_range(LINES_PER_ORDER);
    (0..count as u64)
        .map(|offset| {
            let product_option_id = rng.random_range(OPTION_ID_RANGE);
            let quantity = rng.random_range(QUANTITY_RANGE);
            build_line(first_id + offset, order_id, product_option_id, quantity)
        })
        .collect()
}

/// Build a line with product id and unit price resolved from the option.
pub fn build_line(id: u64, order_id: u32, product_option_id: u32, quantity: u32) -> OrderLineItem {
    let (product_id, unit_price) = resolve_option(product_option_id);
    OrderLineItem {
        id,
        order_id,
        product_id,
        product_option_id,
        quantity,
        unit_price,
        total_price: OrderLineItem::line_total(quantity, unit_price),
    }
}

/// Sum of line totals per order id.
pub fn order_totals(items: &[OrderLineItem]) -> BTreeMap<u32, f64> {
    let mut totals: BTreeMap<u32, f64> = BTreeMap::new();
    for item in items {
        *totals.entry(item.order_id).or_insert(0.0) += item.total_price;
    }
    for total in totals.values_mut() {
        *total = round_currency(*total);
    }
    totals
}
