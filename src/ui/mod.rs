//! Ratatui front end: a customer table and a bill table with an item pane,
//! plus popup forms for entering new records. All persistence goes through the
//! `Ledger` trait.

mod app;
mod forms;
mod helpers;
mod terminal;

pub use app::App;
pub use forms::ValidationError;
pub use terminal::run_app;
