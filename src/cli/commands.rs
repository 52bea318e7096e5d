//! CLI command implementation
//!
//! Boot order: `.env`, config, flags, validation, logging, store, server.

use std::sync::Arc;

use crate::config::{AppConfig, StoreBackend, StoreConfig};
use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::store::{HostedStore, MemoryStore, Store};

use super::args::Cli;
use super::errors::{CliError, CliResult};

/// Resolve configuration: file and environment, then flags
pub fn resolve_config(cli: &Cli) -> CliResult<AppConfig> {
    let mut config = AppConfig::load(cli.config.as_deref())?;

    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if cli.memory_store {
        config.store.backend = StoreBackend::Memory;
    }

    config.validate()?;
    Ok(config)
}

/// Build the store handle the handlers will share
pub fn open_store(config: &StoreConfig) -> CliResult<Arc<dyn Store>> {
    match config.backend {
        StoreBackend::Memory => Ok(Arc::new(MemoryStore::new())),
        StoreBackend::Hosted => {
            let url = config
                .url
                .as_deref()
                .ok_or_else(|| CliError::config_error("Hosted store requires SUPABASE_URL"))?;
            let key = config
                .api_key
                .as_deref()
                .ok_or_else(|| CliError::config_error("Hosted store requires SUPABASE_KEY"))?;
            Ok(Arc::new(HostedStore::new(url, key, config.timeout())?))
        }
    }
}

/// Run the server until shutdown
pub fn run_command(cli: Cli) -> CliResult<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let config = resolve_config(&cli)?;
    init_logging(config.logging.format, config.logging.filter.as_deref())
        .map_err(|e| CliError::logging_error(e.to_string()))?;

    let store = open_store(&config.store)?;
    tracing::info!(
        store = store.name(),
        address = %config.server.socket_addr(),
        cors_origins = ?config.server.cors_origins,
        "Starting Service Dashboard API"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(HttpServer::new(config.server, store).start())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_memory_store() {
        let config = StoreConfig {
            backend: StoreBackend::Memory,
            ..Default::default()
        };
        assert_eq!(open_store(&config).unwrap().name(), "memory");
    }

    #[test]
    fn test_open_hosted_store() {
        let config = StoreConfig {
            url: Some("https://project.supabase.co".to_string()),
            api_key: Some("anon".to_string()),
            ..Default::default()
        };
        assert_eq!(open_store(&config).unwrap().name(), "hosted");
    }

    #[test]
    fn test_open_hosted_without_url_fails() {
        assert!(open_store(&StoreConfig::default()).is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"server": {{"port": 7000}}, "store": {{"backend": "memory"}}}}"#
        )
        .unwrap();

        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            host: Some("127.0.0.1".to_string()),
            port: Some(7100),
            memory_store: false,
        };
        let config = resolve_config(&cli).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7100);
        assert_eq!(config.store.backend, StoreBackend::Memory);
    }
}
