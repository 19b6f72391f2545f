use std::path::Path;

use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::{
    create_bill, create_bill_item, create_customer, fetch_bill, fetch_bill_summaries,
    fetch_customers, fetch_items_for_bill, open_connection, open_in_memory_connection,
};
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::models::{Bill, BillId, BillItem, BillSummary, Customer, CustomerId};

/// Record-keeping operations the front end relies on. Writes take `&mut self`
/// because an implementation holds a single connection that callers must not
/// share across threads of control.
pub trait Ledger {
    fn create_customer(
        &mut self,
        name: &str,
        address: &str,
        contact_info: &str,
    ) -> Result<CustomerId, StoreError>;

    /// `total_amount` is stored as given and never reconciled with items.
    fn create_bill(
        &mut self,
        customer_id: CustomerId,
        date: NaiveDate,
        total_amount: Decimal,
    ) -> Result<BillId, StoreError>;

    fn create_bill_item(
        &mut self,
        bill_id: BillId,
        item_name: &str,
        quantity: u32,
        price: Decimal,
    ) -> Result<(), StoreError>;

    fn list_customers(&self) -> Result<Vec<Customer>, StoreError>;

    /// Inner join against customers; unresolved customers drop the row.
    fn list_bills_with_customer_names(&self) -> Result<Vec<BillSummary>, StoreError>;

    fn list_bill_items(&self, bill_id: BillId) -> Result<Vec<BillItem>, StoreError>;

    fn get_bill(&self, bill_id: BillId) -> Result<Option<Bill>, StoreError>;
}

/// The SQLite-backed ledger. Owns the only connection for the lifetime of the
/// process; dropping it closes the database.
pub struct SqliteLedger {
    conn: Connection,
}

impl SqliteLedger {
    /// Open the database the config resolves to.
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let path = config
            .database_path()
            .map_err(|err| StoreError::unavailable("failed to resolve database path", err))?;
        if config.host != crate::config::DEFAULT_HOST {
            warn!(host = %config.host, "ignoring DB_HOST; the embedded store is always local");
        }
        debug!(user = %config.user, "connection credentials are not used by the embedded store");
        Self::open_path(&path)
    }

    pub fn open_path(path: &Path) -> Result<Self, StoreError> {
        let conn = open_connection(path).inspect_err(|err| {
            warn!(path = %path.display(), error = %err, "could not open ledger database");
        })?;
        info!(path = %path.display(), "ledger database ready");
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = open_in_memory_connection()?;
        Ok(Self { conn })
    }

    /// Borrow the raw connection, for diagnostics and tests.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn log_failure<T>(operation: &str, result: Result<T, StoreError>) -> Result<T, StoreError> {
    result.inspect_err(|err| {
        warn!(operation, kind = ?err.kind(), error = %err, "store operation failed");
    })
}

impl Ledger for SqliteLedger {
    fn create_customer(
        &mut self,
        name: &str,
        address: &str,
        contact_info: &str,
    ) -> Result<CustomerId, StoreError> {
        let id = log_failure(
            "create_customer",
            create_customer(&self.conn, name, address, contact_info),
        )?;
        debug!(customer_id = %id, "customer created");
        Ok(id)
    }

    fn create_bill(
        &mut self,
        customer_id: CustomerId,
        date: NaiveDate,
        total_amount: Decimal,
    ) -> Result<BillId, StoreError> {
        let id = log_failure(
            "create_bill",
            create_bill(&self.conn, customer_id, date, total_amount),
        )?;
        debug!(bill_id = %id, customer_id = %customer_id, %total_amount, "bill created");
        Ok(id)
    }

    fn create_bill_item(
        &mut self,
        bill_id: BillId,
        item_name: &str,
        quantity: u32,
        price: Decimal,
    ) -> Result<(), StoreError> {
        log_failure(
            "create_bill_item",
            create_bill_item(&self.conn, bill_id, item_name, quantity, price),
        )?;
        debug!(bill_id = %bill_id, quantity, %price, "bill item recorded");
        Ok(())
    }

    fn list_customers(&self) -> Result<Vec<Customer>, StoreError> {
        let customers = log_failure("list_customers", fetch_customers(&self.conn))?;
        debug!(count = customers.len(), "customers loaded");
        Ok(customers)
    }

    fn list_bills_with_customer_names(&self) -> Result<Vec<BillSummary>, StoreError> {
        let bills = log_failure(
            "list_bills_with_customer_names",
            fetch_bill_summaries(&self.conn),
        )?;
        debug!(count = bills.len(), "bills loaded");
        Ok(bills)
    }

    fn list_bill_items(&self, bill_id: BillId) -> Result<Vec<BillItem>, StoreError> {
        log_failure("list_bill_items", fetch_items_for_bill(&self.conn, bill_id))
    }

    fn get_bill(&self, bill_id: BillId) -> Result<Option<Bill>, StoreError> {
        log_failure("get_bill", fetch_bill(&self.conn, bill_id))
    }
}
