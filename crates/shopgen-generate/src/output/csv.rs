use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use shopgen_core::{Customer, Order, OrderLineItem};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A row type with a fixed column layout.
pub trait CsvRecord {
    const HEADER: &'static [&'static str];

    fn to_record(&self) -> Vec<String>;
}

impl CsvRecord for Customer {
    const HEADER: &'static [&'static str] = &[
        "customer_id",
        "first_name",
        "last_name",
        "email",
        "phone_number",
        "city",
        "age_group",
    ];

    fn to_record(&self) -> Vec<String> {
        vec![
            self.customer_id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            self.phone_number.clone(),
            self.city.clone(),
            self.age_group.clone(),
        ]
    }
}

impl CsvRecord for OrderLineItem {
    const HEADER: &'static [&'static str] = &[
        "id",
        "order_id",
        "product_id",
        "product_option_id",
        "quantity",
        "unit_price",
        "total_price",
    ];

    fn to_record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.order_id.to_string(),
            self.product_id.to_string(),
            self.product_option_id.to_string(),
            self.quantity.to_string(),
            self.unit_price.to_string(),
            money(self.total_price),
        ]
    }
}

impl CsvRecord for Order {
    const HEADER: &'static [&'static str] = &[
        "id",
        "customer_id",
        "order_date",
        "due_date",
        "ship_date",
        "status",
        "total_amount",
        "shipping_fee",
        "discount_amount",
        "final_amount",
        "payment_method",
        "payment_status",
    ];

    fn to_record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.customer_id.to_string(),
            self.order_date.format(DATE_FORMAT).to_string(),
            self.due_date.format(DATE_FORMAT).to_string(),
            self.ship_date.format(DATE_FORMAT).to_string(),
            self.status.to_string(),
            money(self.total_amount),
            self.shipping_fee.to_string(),
            self.discount_amount.to_string(),
            money(self.final_amount),
            self.payment_method.to_string(),
            self.payment_status.to_string(),
        ]
    }
}

fn money(value: f64) -> String {
    format!("{value:.2}")
}

/// Write rows as CSV with a header line. Returns the number of bytes written.
pub fn write_table_csv<R: CsvRecord>(path: &Path, rows: &[R]) -> Result<u64, csv::Error> {
    let writer = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(R::HEADER)?;
    for row in rows {
        writer.write_record(row.to_record())?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use shopgen_core::{OrderStatus, PaymentMethod, PaymentStatus, UNSHIPPED_DATE};

    use super::*;

    fn sample_order() -> Order {
        let order_date = NaiveDate::from_ymd_opt(2024, 7, 3).expect("order date");
        let due_date = NaiveDate::from_ymd_opt(2024, 7, 9).expect("due date");
        Order {
            id: 1,
            customer_id: 12,
            order_date,
            due_date,
            ship_date: UNSHIPPED_DATE,
            status: OrderStatus::Pending,
            total_amount: 678_572.0,
            shipping_fee: 20_000,
            discount_amount: 15_000,
            final_amount: 683_572.0,
            payment_method: PaymentMethod::Cod,
            payment_status: PaymentStatus::Paid,
        }
    }

    #[test]
    fn order_record_formats_dates_and_money() {
        let record = sample_order().to_record();
        assert_eq!(record.len(), Order::HEADER.len());
        assert_eq!(record[2], "2024-07-03");
        assert_eq!(record[3], "2024-07-09");
        assert_eq!(record[4], "9999-12-31");
        assert_eq!(record[5], "pending");
        assert_eq!(record[6], "678572.00");
        assert_eq!(record[9], "683572.00");
        assert_eq!(record[10], "cod");
    }

    #[test]
    fn writes_header_and_counts_bytes() {
        let path = std::env::temp_dir().join(format!("shopgen_csv_{}.csv", std::process::id()));
        let bytes = write_table_csv(&path, &[sample_order()]).expect("write csv");
        let contents = std::fs::read_to_string(&path).expect("read csv");
        let _ = std::fs::remove_file(&path);

        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some(Order::HEADER.join(",").as_str()));
        assert!(lines.next().is_some_and(|line| line.starts_with("1,12,2024-07-03")));
        assert_eq!(bytes, contents.len() as u64);
    }
}
