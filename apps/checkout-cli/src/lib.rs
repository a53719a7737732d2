//! # Checkout CLI Library
//!
//! Wires the pure core to the process: logging, configuration, sample data
//! and stdout.
//!
//! ## Module Organization
//! ```text
//! checkout_cli/
//! ├── lib.rs      ◄─── You are here (startup & run)
//! ├── config.rs   ◄─── CHECKOUT_* environment variables
//! ├── sample.rs   ◄─── Fixed catalog, account and cart
//! ├── report.rs   ◄─── Text / JSON output
//! └── error.rs    ◄─── AppError, printed as "Error: ..."
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod sample;

use std::io::Write;

use checkout_core::clock::SystemClock;
use checkout_core::process_checkout;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use error::{AppError, AppResult};
use sample::{sample_shop, SampleShop};

/// Exit status of a run that printed its report.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status of any failed run.
pub const EXIT_FAILURE: u8 = 1;

/// Runs one checkout over the sample shop.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize logging (stderr, RUST_LOG, default "warn")              │
/// │  2. Load configuration (CHECKOUT_* over defaults)                       │
/// │  3. Build sample catalog, account and cart                              │
/// │  4. process_checkout                                                    │
/// │  5. Write shipment notice + receipt to stdout                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    init_tracing();

    let config = AppConfig::from_env()?;
    debug!(?config, "configuration loaded");

    let shop = sample_shop(&SystemClock)?;
    let stdout = std::io::stdout();
    run_with(&config, shop, &mut stdout.lock())
}

/// Steps 4 and 5 of [`run`] over any shop and any writer. Nothing is
/// written to `out` when the checkout fails.
pub fn run_with<W: Write>(config: &AppConfig, shop: SampleShop, out: &mut W) -> AppResult<()> {
    let SampleShop {
        mut catalog,
        mut account,
        cart,
    } = shop;
    info!(items = catalog.len(), lines = cart.len(), "shop ready");

    let outcome = process_checkout(&cart, &mut catalog, &mut account, &config.checkout)
        .map_err(AppError::from)
        .inspect_err(|err| debug!(code = err.code(), %err, "checkout failed"))?;

    report::write_report(out, &outcome, config.output)
}

/// Turns the result of a run into its exit status, writing the
/// `Error: <message>` line to `err_out` on failure.
pub fn exit_status<E: Write>(result: &AppResult<()>, err_out: &mut E) -> u8 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            // Nothing left to report a failed stderr write to.
            let _ = writeln!(err_out, "Error: {err}");
            EXIT_FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show cart and pricing decisions
/// - `RUST_LOG=checkout_core=trace` - Everything from the core crate
/// - Default: WARN, so a normal run prints only the report
///
/// Logs go to stderr; stdout is reserved for the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
