//! Binary entry point: read the connection settings, open the ledger, and
//! drive the Ratatui event loop until the user exits.
use anyhow::Context;
use billing_ledger::{logging, run_app, App, SqliteLedger, StoreConfig};
use tracing::info;

/// Initialize logging and persistence, then launch the UI.
///
/// Fatal startup problems (no home directory, unopenable database) are
/// returned to the terminal before raw mode is entered.
fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real environment variables take precedence.
    let dotenv_path = dotenvy::dotenv().ok();

    let config = StoreConfig::from_env();
    let log_dir = config.log_dir().context("failed to resolve data directory")?;
    logging::init(&log_dir)?;
    info!(?config, ?dotenv_path, "starting billing ledger");

    let ledger = SqliteLedger::open(&config)?;
    let mut app = App::new(ledger);
    let result = run_app(&mut app);

    info!("billing ledger stopped");
    result
}
