use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Synthetic customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub city: String,
    pub age_group: String,
}

impl Customer {
    /// Email address derived from the customer id.
    pub fn email_for(customer_id: u32) -> String {
        format!("CUST{customer_id}@gmail.com")
    }
}

/// One product line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub id: u64,
    pub order_id: u32,
    /// Resolved from `product_option_id`, `-1` when unresolvable.
    pub product_id: i64,
    pub product_option_id: u32,
    pub quantity: u32,
    /// Resolved from `product_option_id`, `-1` when unresolvable.
    pub unit_price: i64,
    pub total_price: f64,
}

impl OrderLineItem {
    pub fn line_total(quantity: u32, unit_price: i64) -> f64 {
        round_currency(f64::from(quantity) * unit_price as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub customer_id: u32,
    pub order_date: NaiveDate,
    pub due_date: NaiveDate,
    pub ship_date: NaiveDate,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub shipping_fee: i64,
    pub discount_amount: i64,
    pub final_amount: f64,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipping,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipping => "shipping",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Whether an order in this status has left the warehouse.
    pub fn is_shipped(&self) -> bool {
        matches!(self, OrderStatus::Shipping | OrderStatus::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only cash on delivery is offered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cod,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "cod",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ship date recorded for orders that have not shipped.
pub const UNSHIPPED_DATE: NaiveDate = match NaiveDate::from_ymd_opt(9999, 12, 31) {
    Some(date) => date,
    None => panic!("9999-12-31 is a valid date"),
};

pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_derived_from_id() {
        assert_eq!(Customer::email_for(17), "CUST17@gmail.com");
    }

    #[test]
    fn line_total_multiplies_quantity() {
        assert_eq!(OrderLineItem::line_total(2, 339_286), 678_572.0);
        assert_eq!(OrderLineItem::line_total(3, -1), -3.0);
    }

    #[test]
    fn shipped_statuses() {
        assert!(OrderStatus::Shipping.is_shipped());
        assert!(OrderStatus::Delivered.is_shipped());
        assert!(!OrderStatus::Pending.is_shipped());
        assert!(!OrderStatus::Confirmed.is_shipped());
        assert!(!OrderStatus::Cancelled.is_shipped());
    }

    #[test]
    fn enums_serialize_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Delivered).expect("serialize status");
        assert_eq!(json, "\"delivered\"");
        let json = serde_json::to_string(&PaymentMethod::Cod).expect("serialize method");
        assert_eq!(json, "\"cod\"");
        assert_eq!(PaymentStatus::Refunded.to_string(), "refunded");
    }

    #[test]
    fn unshipped_date_is_far_future() {
        assert_eq!(UNSHIPPED_DATE.to_string(), "9999-12-31");
    }
}
