use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeDelta};
use rand::Rng;

use shopgen_core::catalog::{ORDER_STATUS_WEIGHTS, PAYMENT_STATUS_WEIGHTS};
use shopgen_core::{
    Order, OrderStatus, PaymentMethod, PaymentStatus, UNSHIPPED_DATE, round_currency,
};

use crate::errors::GenerationError;
use crate::generators::WeightedPool;

const DUE_DAYS: std::ops::RangeInclusive<i64> = 5..=10;
const SHIP_DAYS: std::ops::RangeInclusive<i64> = 1..=3;
const SHIPPING_FEE_THOUSANDS: std::ops::RangeInclusive<i64> = 10..=50;
const DISCOUNT_THOUSANDS: std::ops::RangeInclusive<i64> = 10..=100;

/// Inputs the order stage needs besides the per-order totals.
#[derive(Debug, Clone, Copy)]
pub struct OrderSettings {
    pub order_count: u32,
    pub customer_count: u32,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
}

/// Generate orders `1..=order_count`, taking each total from `totals`.
pub fn generate_orders<R: Rng + ?Sized>(
    settings: &OrderSettings,
    totals: &BTreeMap<u32, f64>,
    rng: &mut R,
) -> Result<Vec<Order>, GenerationError> {
    let statuses = WeightedPool::new(ORDER_STATUS_WEIGHTS)?;
    let payment_statuses = WeightedPool::new(PAYMENT_STATUS_WEIGHTS)?;
    let window_days = (settings.window_end - settings.window_start).num_days();

    let mut orders = Vec::with_capacity(settings.order_count as usize);
    for order_id in 1..=settings.order_count {
        let total_amount = totals
            .get(&order_id)
            .copied()
            .ok_or(GenerationError::MissingOrderTotal(order_id))?;

        // Both window bounds are possible order days.
        let order_date =
            settings.window_start + TimeDelta::days(rng.random_range(0..=window_days));
        let due_date = order_date + TimeDelta::days(rng.random_range(DUE_DAYS));
        let status = *statuses.sample(rng);
        let ship_date = ship_date(status, order_date, rng);
        let shipping_fee = rng.random_range(SHIPPING_FEE_THOUSANDS) * 1000;
        let discount_amount = rng.random_range(DISCOUNT_THOUSANDS) * 1000;
        let final_amount =
            round_currency(total_amount + shipping_fee as f64 - discount_amount as f64);
        let payment_status: PaymentStatus = *payment_statuses.sample(rng);
        let customer_id = rng.random_range(1..=settings.customer_count);

        orders.push(Order {
            id: order_id,
            customer_id,
            order_date,
            due_date,
            ship_date,
            status,
            total_amount,
            shipping_fee,
            discount_amount,
            final_amount,
            payment_method: PaymentMethod::Cod,
            payment_status,
        });
    }

    Ok(orders)
}

fn ship_date<R: Rng + ?Sized>(
    status: OrderStatus,
    order_date: NaiveDate,
    rng: &mut R,
) -> NaiveDate {
    if status.is_shipped() {
        order_date + TimeDelta::days(rng.random_range(SHIP_DAYS))
    } else {
        UNSHIPPED_DATE
    }
}
