use std::fs;
use std::path::Path;

use rusqlite::Connection;

use crate::error::{StoreError, StoreResultExt};

/// Open (creating if needed) the SQLite file at `path` and bootstrap the
/// schema. The parent directory is created on demand.
pub fn open_connection(path: &Path) -> Result<Connection, StoreError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|err| StoreError::unavailable("failed to create data directory", err))?;
    }

    let conn = Connection::open(path).store_context("failed to open SQLite database")?;
    ensure_schema(&conn)?;
    Ok(conn)
}

/// Private in-memory database, used by tests and throwaway sessions.
pub fn open_in_memory_connection() -> Result<Connection, StoreError> {
    let conn = Connection::open_in_memory().store_context("failed to open in-memory database")?;
    ensure_schema(&conn)?;
    Ok(conn)
}

/// Turn on foreign-key enforcement and create the three ledger tables if they
/// are missing. Safe to run on every start.
pub fn ensure_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute("PRAGMA foreign_keys = ON", [])
        .store_context("failed to enable foreign keys")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS customers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            address TEXT NOT NULL,
            contact_info TEXT NOT NULL
        )",
        [],
    )
    .store_context("failed to create customers table")?;

    // Amounts are stored as decimal text so no precision is lost to REAL.
    conn.execute(
        "CREATE TABLE IF NOT EXISTS bills (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            customer_id INTEGER NOT NULL,
            date TEXT NOT NULL,
            total_amount TEXT NOT NULL,
            FOREIGN KEY(customer_id) REFERENCES customers(id)
        )",
        [],
    )
    .store_context("failed to create bills table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS bill_items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            bill_id INTEGER NOT NULL,
            item_name TEXT NOT NULL,
            quantity INTEGER NOT NULL CHECK (quantity > 0),
            price TEXT NOT NULL,
            FOREIGN KEY(bill_id) REFERENCES bills(id)
        )",
        [],
    )
    .store_context("failed to create bill_items table")?;

    Ok(())
}
