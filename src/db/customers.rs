use rusqlite::{params, Connection};

use crate::error::{StoreError, StoreResultExt};
use crate::models::{Customer, CustomerId};

/// Insert a customer and hand back the id SQLite assigned to it.
pub fn create_customer(
    conn: &Connection,
    name: &str,
    address: &str,
    contact_info: &str,
) -> Result<CustomerId, StoreError> {
    conn.execute(
        "INSERT INTO customers (name, address, contact_info) VALUES (?1, ?2, ?3)",
        params![name, address, contact_info],
    )
    .store_context("failed to insert customer")?;

    Ok(CustomerId(conn.last_insert_rowid()))
}

/// Every customer in insertion order.
pub fn fetch_customers(conn: &Connection) -> Result<Vec<Customer>, StoreError> {
    let mut stmt = conn
        .prepare("SELECT id, name, address, contact_info FROM customers ORDER BY id")
        .store_context("failed to prepare customer query")?;

    let customers = stmt
        .query_map([], |row| {
            Ok(Customer {
                id: CustomerId(row.get(0)?),
                name: row.get(1)?,
                address: row.get(2)?,
                contact_info: row.get(3)?,
            })
        })
        .store_context("failed to load customers")?
        .collect::<Result<Vec<_>, _>>()
        .store_context("failed to collect customers")?;

    Ok(customers)
}
