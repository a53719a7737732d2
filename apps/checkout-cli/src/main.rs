//! # Checkout Entry Point
//!
//! Runs one checkout over the sample shop and prints the shipment notice and
//! receipt. On failure prints `Error: <message>` to stderr and exits with
//! status 1.
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    let result = checkout_cli::run();
    let stderr = std::io::stderr();
    ExitCode::from(checkout_cli::exit_status(&result, &mut stderr.lock()))
}
