use std::ops::RangeInclusive;

use crate::SENTINEL;
use crate::types::{OrderStatus, PaymentStatus};

/// Product option ids drawn for order lines.
pub const OPTION_ID_RANGE: RangeInclusive<u32> = 1..=32;

pub const FIRST_NAMES: &[&str] = &[
    "Lan", "Mai", "Ngọc", "Hương", "Thảo", "Linh", "Phương", "Trang", "Yến", "Hà", "Anh", "Hiền",
    "Thu", "Diệu", "Kiều", "Bảo", "Đức", "Hoàng", "Khánh", "Long", "Minh", "Nam", "Quang", "Sơn",
    "Thắng", "Tài", "Trung", "Tùng", "Vinh", "Duy",
];

pub const LAST_NAMES: &[&str] = &[
    "Nguyễn", "Trần", "Lê", "Phạm", "Huỳnh", "Hoàng", "Võ", "Vũ", "Phan", "Trương", "Bùi", "Đặng",
    "Đỗ", "Ngô", "Dương",
];

/// Cities with relative weights. The capital dominates the customer base.
pub const CITIES: &[(&str, u32)] = &[
    ("Hà Nội", 50),
    ("Thành phố Hồ Chí Minh", 10),
    ("Đà Nẵng", 5),
    ("Hải Phòng", 5),
    ("Cần Thơ", 5),
    ("Huế", 5),
    ("Nha Trang", 5),
    ("Đà Lạt", 5),
    ("Hạ Long", 5),
    ("Vinh", 5),
];

pub const AGE_GROUPS: &[&str] = &["18-25", "26-35", "36-45", "46-55", "56-65", "65+"];

pub const PHONE_PREFIXES: &[&str] = &["09", "03", "07", "08", "05"];

/// Random digits appended after the phone prefix.
pub const PHONE_DIGITS: usize = 8;

pub const ORDER_STATUS_WEIGHTS: &[(OrderStatus, u32)] = &[
    (OrderStatus::Pending, 5),
    (OrderStatus::Confirmed, 25),
    (OrderStatus::Shipping, 25),
    (OrderStatus::Delivered, 40),
    (OrderStatus::Cancelled, 5),
];

pub const PAYMENT_STATUS_WEIGHTS: &[(PaymentStatus, u32)] = &[
    (PaymentStatus::Pending, 10),
    (PaymentStatus::Paid, 60),
    (PaymentStatus::Failed, 10),
    (PaymentStatus::Refunded, 20),
];

/// Union of inclusive option id ranges.
#[derive(Debug, Clone, Copy)]
pub struct OptionSet(&'static [RangeInclusive<u32>]);

impl OptionSet {
    pub const fn new(ranges: &'static [RangeInclusive<u32>]) -> Self {
        Self(ranges)
    }

    pub fn contains(&self, option_id: u32) -> bool {
        self.0.iter().any(|range| range.contains(&option_id))
    }
}

/// Ordered partition of product option ids into values.
///
/// Entries are evaluated in order and the first set containing the option id
/// wins. Ids outside every set resolve to [`SENTINEL`].
#[derive(Debug, Clone, Copy)]
pub struct OptionTable {
    name: &'static str,
    entries: &'static [(OptionSet, i64)],
}

impl OptionTable {
    pub const fn new(name: &'static str, entries: &'static [(OptionSet, i64)]) -> Self {
        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> &'static [(OptionSet, i64)] {
        self.entries
    }

    pub fn lookup(&self, option_id: u32) -> i64 {
        self.entries
            .iter()
            .find(|(set, _)| set.contains(option_id))
            .map(|(_, value)| *value)
            .unwrap_or(SENTINEL)
    }

    /// Option ids in `range` that no entry covers.
    pub fn gaps(&self, range: RangeInclusive<u32>) -> Vec<u32> {
        range
            .filter(|id| !self.entries.iter().any(|(set, _)| set.contains(*id)))
            .collect()
    }
}

pub static UNIT_PRICES: OptionTable = OptionTable::new(
    "unit_price",
    &[
        (OptionSet::new(&[1..=5]), 339_286),
        (OptionSet::new(&[6..=8]), 565_098),
        (OptionSet::new(&[9..=12]), 207_660),
        (OptionSet::new(&[13..=18, 23..=26]), 373_029),
        (OptionSet::new(&[19..=21]), 251_461),
        (OptionSet::new(&[22..=22]), 46_000),
        (OptionSet::new(&[27..=32]), 303_091),
    ],
);

pub static PRODUCT_IDS: OptionTable = OptionTable::new(
    "product_id",
    &[
        (OptionSet::new(&[1..=5]), 1),
        (OptionSet::new(&[6..=8]), 2),
        (OptionSet::new(&[9..=12]), 3),
        (OptionSet::new(&[13..=15]), 4),
        (OptionSet::new(&[16..=18]), 5),
        (OptionSet::new(&[19..=21]), 6),
        (OptionSet::new(&[22..=22]), 7),
        (OptionSet::new(&[23..=24]), 8),
        (OptionSet::new(&[25..=26]), 9),
        (OptionSet::new(&[27..=32]), 10),
    ],
);

/// Resolve a product option into `(product_id, unit_price)`.
pub fn resolve_option(option_id: u32) -> (i64, i64) {
    (PRODUCT_IDS.lookup(option_id), UNIT_PRICES.lookup(option_id))
}
