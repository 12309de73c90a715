pub mod csv;

pub const CUSTOMERS_FILE: &str = "customers.csv";
pub const ORDER_LINES_FILE: &str = "orders_detail.csv";
pub const ORDERS_FILE: &str = "orders.csv";
pub const REPORT_FILE: &str = "generation_report.json";
