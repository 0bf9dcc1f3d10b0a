use anyhow::Context;
use clap::Parser;
use countries_api::CountryService;
use countries_postgres::repository::db_init::init_database;
use countries_postgres::config::{
    DEFAULT_ACQUIRE_TIMEOUT_SECS, DEFAULT_MAX_CONNECTIONS, DEFAULT_SOURCE_TIMEOUT_SECS,
};
use countries_postgres::{telemetry, AppConfig, CountryServiceImpl, PostgresRepositories};
use countries_source::{CountriesNowClient, DEFAULT_SOURCE_URL};
use std::sync::Arc;
use std::time::Duration;

/// Import the external country list, inserting countries not stored yet.
///
/// Every setting can also come from the environment variable named in its help.
#[derive(Parser, Debug)]
#[command(name = "countries-import", version)]
struct Cli {
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    #[arg(long, env = "COUNTRIES_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS, value_parser = clap::value_parser!(u32).range(1..))]
    max_connections: u32,

    #[arg(long, env = "COUNTRIES_ACQUIRE_TIMEOUT_SECS", default_value_t = DEFAULT_ACQUIRE_TIMEOUT_SECS)]
    acquire_timeout_secs: u64,

    #[arg(long, env = "COUNTRIES_SOURCE_URL", default_value = DEFAULT_SOURCE_URL)]
    source_url: String,

    #[arg(long, env = "COUNTRIES_SOURCE_TIMEOUT_SECS", default_value_t = DEFAULT_SOURCE_TIMEOUT_SECS)]
    source_timeout_secs: u64,

    /// Create missing tables before importing
    #[arg(long)]
    init_schema: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> AppConfig {
        AppConfig {
            database_url: self.database_url.clone(),
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
            source_url: self.source_url.clone(),
            source_timeout: Duration::from_secs(self.source_timeout_secs),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init_logger(cli.verbose, cli.json_logs).context("failed to install logger")?;

    let config = cli.config();
    tracing::debug!(source_url = %config.source_url, max_connections = config.max_connections, "configuration loaded");

    let pool = config.connect().await.context("failed to connect to the database")?;
    if cli.init_schema {
        init_database(&pool).await.context("failed to initialize the schema")?;
        tracing::info!("schema initialized");
    }

    let source = CountriesNowClient::new(config.source_url.clone(), config.source_timeout)
        .context("failed to build the source client")?;
    let service = CountryServiceImpl::new(
        Arc::new(PostgresRepositories::new(Arc::new(pool))),
        Arc::new(source),
    );

    let summary = service.update_list().await.context("country import failed")?;
    println!("{}", summary.message());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_land_in_config() {
        let cli = Cli::try_parse_from([
            "countries-import",
            "--database-url",
            "postgres://flag/db",
            "--source-url",
            "http://127.0.0.1:9/countries",
            "--source-timeout-secs",
            "3",
            "--max-connections",
            "2",
            "--acquire-timeout-secs",
            "7",
        ])
        .unwrap();

        let config = cli.config();
        assert_eq!(config.database_url, "postgres://flag/db");
        assert_eq!(config.source_url, "http://127.0.0.1:9/countries");
        assert_eq!(config.source_timeout, Duration::from_secs(3));
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.acquire_timeout, Duration::from_secs(7));
    }

    #[test]
    fn test_zero_max_connections_is_rejected() {
        let parsed = Cli::try_parse_from([
            "countries-import",
            "--database-url",
            "postgres://flag/db",
            "--max-connections",
            "0",
        ]);
        assert!(parsed.is_err());
    }
}
