//! Core library surface for the billing ledger.
//!
//! The persistence layer (`db`) is the heart of the crate: it stores
//! customers, bills and bill items in SQLite and answers the two listing
//! queries. The terminal front end in `ui` is one caller of it.
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod ui;

/// Convenience re-exports for the persistence layer.
pub use db::{Ledger, SqliteLedger};

pub use config::StoreConfig;
pub use error::{StoreError, StoreErrorKind};

/// The record types other layers manipulate.
pub use models::{Bill, BillId, BillItem, BillSummary, Customer, CustomerId};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
