//! Record types that mirror the SQLite schema. Rows are always decoded into
//! these named structs so a column reorder in a query cannot silently shuffle
//! fields.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Store-assigned customer identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerId(pub i64);

/// Store-assigned bill identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BillId(pub i64);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for BillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A registered customer. Customers are never edited once written.
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub address: String,
    /// Free-form phone number, e-mail or similar.
    pub contact_info: String,
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A bill as stored. `total_amount` is whatever the caller supplied when the
/// bill was created; it is not derived from the bill's items.
pub struct Bill {
    pub id: BillId,
    pub customer_id: CustomerId,
    pub date: NaiveDate,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One row of the bill listing, with the owning customer's name joined in.
pub struct BillSummary {
    pub bill_id: BillId,
    pub customer_name: String,
    pub date: NaiveDate,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single line on a bill. The store assigns each line a row id but never
/// hands it out.
pub struct BillItem {
    pub bill_id: BillId,
    pub item_name: String,
    pub quantity: u32,
    /// Unit price.
    pub price: Decimal,
}
