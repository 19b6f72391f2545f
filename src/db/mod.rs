//! Persistence module split across logical submodules. Query helpers are free
//! functions over a borrowed `Connection`; `SqliteLedger` owns the one
//! connection the process keeps open and exposes them through the `Ledger`
//! trait.

mod bill_items;
mod bills;
mod connection;
mod customers;
mod ledger;

use std::str::FromStr;

use rusqlite::types::Type;
use rusqlite::Row;
use rust_decimal::Decimal;

pub use bill_items::{create_bill_item, fetch_items_for_bill};
pub use bills::{create_bill, fetch_bill, fetch_bill_summaries};
pub use connection::{ensure_schema, open_connection, open_in_memory_connection};
pub use customers::{create_customer, fetch_customers};
pub use ledger::{Ledger, SqliteLedger};

/// Decode a currency column written as decimal text.
fn decimal_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Decimal> {
    let raw: String = row.get(idx)?;
    Decimal::from_str(raw.trim())
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err)))
}
