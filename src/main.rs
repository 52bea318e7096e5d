//! Service Dashboard API entry point
//!
//! All logic lives in the CLI module; this only reports failures.

use service_dashboard_api::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
