use rusqlite::{params, Connection};
use rust_decimal::Decimal;

use super::decimal_column;
use crate::error::{StoreError, StoreResultExt};
use crate::models::{BillId, BillItem};

/// Append a line item to an existing bill. The bill's stored total is left
/// alone; no identifier is handed back.
pub fn create_bill_item(
    conn: &Connection,
    bill_id: BillId,
    item_name: &str,
    quantity: u32,
    price: Decimal,
) -> Result<(), StoreError> {
    conn.execute(
        "INSERT INTO bill_items (bill_id, item_name, quantity, price) VALUES (?1, ?2, ?3, ?4)",
        params![bill_id.0, item_name, quantity, price.to_string()],
    )
    .store_context("failed to insert bill item")?;
    Ok(())
}

/// Items recorded against one bill, oldest first.
pub fn fetch_items_for_bill(conn: &Connection, bill_id: BillId) -> Result<Vec<BillItem>, StoreError> {
    let mut stmt = conn
        .prepare(
            "SELECT bill_id, item_name, quantity, price
             FROM bill_items
             WHERE bill_id = ?1
             ORDER BY id",
        )
        .store_context("failed to prepare bill item query")?;

    let items = stmt
        .query_map([bill_id.0], |row| {
            Ok(BillItem {
                bill_id: BillId(row.get(0)?),
                item_name: row.get(1)?,
                quantity: row.get(2)?,
                price: decimal_column(row, 3)?,
            })
        })
        .store_context("failed to load bill items")?
        .collect::<Result<Vec<_>, _>>()
        .store_context("failed to collect bill items")?;

    Ok(items)
}
