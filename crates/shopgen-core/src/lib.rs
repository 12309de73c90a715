//! Core contracts for shopgen.
//!
//! This crate defines the customer, order, and order line records together
//! with the static catalog (pools, weights, product option tables) that the
//! generators sample from.

pub mod catalog;
pub mod types;

pub use catalog::{OptionSet, OptionTable, PRODUCT_IDS, UNIT_PRICES, resolve_option};
pub use types::{
    Customer, Order, OrderLineItem, OrderStatus, PaymentMethod, PaymentStatus, UNSHIPPED_DATE,
    round_currency,
};

/// Value used for ids and prices that cannot be resolved.
pub const SENTINEL: i64 = -1;
