//! CLI argument definitions using clap
//!
//! service-dashboard-api [--config <path>] [--host <host>] [--port <port>] [--memory-store]

use clap::Parser;
use std::path::PathBuf;

/// Service Dashboard API - customers, kanban orders and dashboard figures
#[derive(Parser, Debug)]
#[command(name = "service-dashboard-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to (overrides config and HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides config and PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Serve from process-local tables instead of the hosted store
    #[arg(long)]
    pub memory_store: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["service-dashboard-api"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.memory_store);
    }

    #[test]
    fn test_all_arguments() {
        let cli = Cli::try_parse_from([
            "service-dashboard-api",
            "--config",
            "dashboard.json",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--memory-store",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("dashboard.json")));
        assert_eq!(cli.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(cli.port, Some(9000));
        assert!(cli.memory_store);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["service-dashboard-api", "--port", "http"]).is_err());
    }
}
