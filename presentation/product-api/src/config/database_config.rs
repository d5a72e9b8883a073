use std::time::Duration;

use persistence::db::DatabaseConfig;
use persistence::product::repository::BulkReadPolicy;

use super::{ConfigError, parse_var};

/// Load database connection settings through `lookup`
///
/// Variables (defaults in parentheses):
/// - DB_HOST ("localhost"), DB_PORT (6432), DB_NAME ("productapp")
/// - DB_USER ("postgres"), DB_PASSWORD ("postgres")
/// - DB_MAX_CONNECTIONS (10)
/// - DB_IDLE_TIMEOUT_SECS (30), DB_ACQUIRE_TIMEOUT_SECS (30)
pub fn load_database_config<F>(lookup: &F) -> Result<DatabaseConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = DatabaseConfig::default();

    Ok(DatabaseConfig {
        host: lookup("DB_HOST").unwrap_or(defaults.host),
        port: parse_var(lookup, "DB_PORT", defaults.port)?,
        db_name: lookup("DB_NAME").unwrap_or(defaults.db_name),
        username: lookup("DB_USER").unwrap_or(defaults.username),
        password: lookup("DB_PASSWORD").unwrap_or(defaults.password),
        max_connections: parse_var(lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
        idle_timeout: Duration::from_secs(parse_var(
            lookup,
            "DB_IDLE_TIMEOUT_SECS",
            defaults.idle_timeout.as_secs(),
        )?),
        acquire_timeout: Duration::from_secs(parse_var(
            lookup,
            "DB_ACQUIRE_TIMEOUT_SECS",
            defaults.acquire_timeout.as_secs(),
        )?),
    })
}

/// PRODUCTS_BULK_READ_POLICY: "degrade" (default) or "propagate"
pub fn load_bulk_read_policy<F>(lookup: &F) -> Result<BulkReadPolicy, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    parse_var(lookup, "PRODUCTS_BULK_READ_POLICY", BulkReadPolicy::default())
}
