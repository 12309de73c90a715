use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, warn};

use shopgen_core::{Customer, Order, OrderLineItem, SENTINEL};

use crate::errors::GenerationError;
use crate::generators::customers::generate_customers;
use crate::generators::order_lines::{generate_order_lines, order_totals};
use crate::generators::orders::{OrderSettings, generate_orders};
use crate::generators::stage_rng;
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::csv::{CsvRecord, write_table_csv};
use crate::output::{CUSTOMERS_FILE, ORDER_LINES_FILE, ORDERS_FILE, REPORT_FILE};

/// Generated records for all three tables.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub order_lines: Vec<OrderLineItem>,
    pub orders: Vec<Order>,
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for generating the customer/order dataset.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Build the dataset in memory without touching the filesystem.
    pub fn generate(&self) -> Result<Dataset, GenerationError> {
        self.options.validate()?;

        let customers = self.customers()?;
        let order_lines = self.order_lines();
        let orders = self.orders(&order_lines)?;

        Ok(Dataset {
            customers,
            order_lines,
            orders,
        })
    }

    /// Generate every table and write it under `out_dir`.
    ///
    /// Each table is written as soon as its stage finishes. A failure leaves
    /// the files written before it in place.
    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        self.options.validate()?;
        let seed = self.options.seed;

        let out_dir = self.options.out_dir.clone();
        std::fs::create_dir_all(&out_dir)?;

        info!(
            seed,
            customers = self.options.customer_count,
            orders = self.options.order_count,
            out_dir = %out_dir.display(),
            "generation started"
        );

        let mut report = GenerationReport::new(seed);

        let customers = self.customers()?;
        write_table(&out_dir, "customers", CUSTOMERS_FILE, &customers, &mut report)?;

        let order_lines = self.order_lines();
        for item in order_lines
            .iter()
            .filter(|item| item.product_id == SENTINEL || item.unit_price == SENTINEL)
        {
            report.record_unresolved_line();
            warn!(
                line_id = item.id,
                product_option_id = item.product_option_id,
                "product option did not resolve"
            );
        }
        write_table(&out_dir, "order_lines", ORDER_LINES_FILE, &order_lines, &mut report)?;

        let orders = self.orders(&order_lines)?;
        for order in &orders {
            report.record_order_status(order.status.as_str());
            report.record_payment_status(order.payment_status.as_str());
        }
        write_table(&out_dir, "orders", ORDERS_FILE, &orders, &mut report)?;

        if self.options.write_report {
            let report_path = out_dir.join(REPORT_FILE);
            std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;
        }

        info!(
            seed,
            tables = report.tables.len(),
            bytes_written = report.bytes_written,
            unresolved_lines = report.unresolved_lines,
            duration_ms = start.elapsed().as_millis() as u64,
            "generation completed"
        );

        Ok(GenerationResult { out_dir, report })
    }

    fn customers(&self) -> Result<Vec<Customer>, GenerationError> {
        let mut rng = stage_rng(self.options.seed, "customers");
        generate_customers(self.options.customer_count, &mut rng)
    }

    fn order_lines(&self) -> Vec<OrderLineItem> {
        let mut rng = stage_rng(self.options.seed, "order_lines");
        generate_order_lines(self.options.order_count, 1, &mut rng).items
    }

    fn orders(&self, order_lines: &[OrderLineItem]) -> Result<Vec<Order>, GenerationError> {
        let totals = order_totals(order_lines);
        let mut rng = stage_rng(self.options.seed, "orders");
        generate_orders(&self.order_settings(), &totals, &mut rng)
    }

    fn order_settings(&self) -> OrderSettings {
        OrderSettings {
            order_count: self.options.order_count,
            customer_count: self.options.customer_count,
            window_start: self.options.order_window_start,
            window_end: self.options.order_window_end,
        }
    }
}

fn write_table<R: CsvRecord>(
    out_dir: &Path,
    table: &str,
    file: &str,
    rows: &[R],
    report: &mut GenerationReport,
) -> Result<(), GenerationError> {
    let table_start = Instant::now();
    let path = out_dir.join(file);
    let bytes = write_table_csv(&path, rows)?;
    report.record_table(table, file, rows.len() as u64, bytes);
    info!(
        table,
        path = %path.display(),
        rows = rows.len() as u64,
        bytes,
        duration_ms = table_start.elapsed().as_millis() as u64,
        "table written"
    );
    Ok(())
}
