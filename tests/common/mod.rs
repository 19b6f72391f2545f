// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use billing_ledger::{SqliteLedger, StoreConfig};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::TempDir;

/// Helper to open a ledger backed by a file in a temporary directory
pub fn test_ledger() -> Result<(SqliteLedger, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("ledger.sqlite");
    let config = StoreConfig {
        database: db_path.to_string_lossy().into_owned(),
        ..StoreConfig::default()
    };
    let ledger = SqliteLedger::open(&config)?;
    Ok((ledger, temp_dir))
}

/// Helper to parse a date string
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Helper to parse a decimal amount
pub fn amount(raw: &str) -> Decimal {
    raw.parse().unwrap()
}
