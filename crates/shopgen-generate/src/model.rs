use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Directory where the CSV files are written. Created if absent.
    pub out_dir: PathBuf,
    /// Run seed. Each stage derives its own stream from it.
    pub seed: u64,
    pub customer_count: u32,
    pub order_count: u32,
    /// First possible order day.
    pub order_window_start: NaiveDate,
    /// Last possible order day.
    pub order_window_end: NaiveDate,
    /// Write `generation_report.json` next to the CSV files.
    pub write_report: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("data/raw"),
            seed: 42,
            customer_count: 1000,
            order_count: 10_000,
            order_window_start: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap_or_default(),
            order_window_end: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap_or_default(),
            write_report: true,
        }
    }
}

impl GenerateOptions {
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.customer_count == 0 {
            return Err(GenerationError::InvalidOptions(
                "customer_count must be > 0".to_string(),
            ));
        }
        if self.order_count == 0 {
            return Err(GenerationError::InvalidOptions(
                "order_count must be > 0".to_string(),
            ));
        }
        if self.order_window_end <= self.order_window_start {
            return Err(GenerationError::InvalidOptions(format!(
                "order window end {} must be after start {}",
                self.order_window_end, self.order_window_start
            )));
        }
        // Ship dates must stay distinguishable from the unshipped marker.
        if self.order_window_end.year() >= 9999 {
            return Err(GenerationError::InvalidOptions(
                "order window must end before year 9999".to_string(),
            ));
        }
        Ok(())
    }
}

/// Summary of a written table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub file: String,
    pub rows: u64,
    pub bytes: u64,
}

/// Report for a generation run. Contains no timings so reruns match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub seed: u64,
    pub tables: Vec<TableReport>,
    pub bytes_written: u64,
    pub unresolved_lines: u64,
    pub order_status_counts: BTreeMap<String, u64>,
    pub payment_status_counts: BTreeMap<String, u64>,
}

impl GenerationReport {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            tables: Vec::new(),
            bytes_written: 0,
            unresolved_lines: 0,
            order_status_counts: BTreeMap::new(),
            payment_status_counts: BTreeMap::new(),
        }
    }

    pub fn record_table(&mut self, table: &str, file: &str, rows: u64, bytes: u64) {
        self.bytes_written += bytes;
        self.tables.push(TableReport {
            table: table.to_string(),
            file: file.to_string(),
            rows,
            bytes,
        });
    }

    pub fn record_unresolved_line(&mut self) {
        self.unresolved_lines += 1;
    }

    pub fn record_order_status(&mut self, status: &str) {
        *self.order_status_counts.entry(status.to_string()).or_insert(0) += 1;
    }

    pub fn record_payment_status(&mut self, status: &str) {
        *self
            .payment_status_counts
            .entry(status.to_string())
            .or_insert(0) += 1;
    }
}
