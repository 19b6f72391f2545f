use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;

use super::decimal_column;
use crate::error::{StoreError, StoreResultExt};
use crate::models::{Bill, BillId, BillSummary, CustomerId};

/// Insert a bill for an existing customer. The total is stored exactly as
/// given; a dangling `customer_id` is rejected by the foreign key.
pub fn create_bill(
    conn: &Connection,
    customer_id: CustomerId,
    date: NaiveDate,
    total_amount: Decimal,
) -> Result<BillId, StoreError> {
    conn.execute(
        "INSERT INTO bills (customer_id, date, total_amount) VALUES (?1, ?2, ?3)",
        params![customer_id.0, date, total_amount.to_string()],
    )
    .store_context("failed to insert bill")?;

    Ok(BillId(conn.last_insert_rowid()))
}

/// Look up a single bill by id.
pub fn fetch_bill(conn: &Connection, bill_id: BillId) -> Result<Option<Bill>, StoreError> {
    conn.query_row(
        "SELECT id, customer_id, date, total_amount FROM bills WHERE id = ?1",
        [bill_id.0],
        |row| {
            Ok(Bill {
                id: BillId(row.get(0)?),
                customer_id: CustomerId(row.get(1)?),
                date: row.get(2)?,
                total_amount: decimal_column(row, 3)?,
            })
        },
    )
    .optional()
    .store_context("failed to load bill")
}

/// Bills joined with their customer's name, in insertion order. This is an
/// inner join: a bill whose customer cannot be resolved is left out rather
/// than reported.
pub fn fetch_bill_summaries(conn: &Connection) -> Result<Vec<BillSummary>, StoreError> {
    let mut stmt = conn
        .prepare(
            "SELECT b.id, c.name, b.date, b.total_amount
             FROM bills b
             INNER JOIN customers c ON b.customer_id = c.id
             ORDER BY b.id",
        )
        .store_context("failed to prepare bill query")?;

    let bills = stmt
        .query_map([], |row| {
            Ok(BillSummary {
                bill_id: BillId(row.get(0)?),
                customer_name: row.get(1)?,
                date: row.get(2)?,
                total_amount: decimal_column(row, 3)?,
            })
        })
        .store_context("failed to load bills")?
        .collect::<Result<Vec<_>, _>>()
        .store_context("failed to collect bills")?;

    Ok(bills)
}
