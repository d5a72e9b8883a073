use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error: {0}")]
    ConnectionError(#[source] sqlx::Error),
}

/// Configuration for the database connection pool
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub db_name: String,
    pub username: String,
    pub password: String,
    pub max_connections: u32,
    pub idle_timeout: Duration,
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6432,
            db_name: "productapp".to_string(),
            username: "postgres".to_string(),
            password: "postgres".to_string(),
            max_connections: 10,
            idle_timeout: Duration::from_secs(30),
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.db_name)
            .username(&self.username)
            .password(&self.password)
    }

    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .idle_timeout(self.idle_timeout)
            .acquire_timeout(self.acquire_timeout)
    }
}

/// Creates a PostgreSQL connection pool
///
/// The pool is owned by the caller and handed to each repository at
/// construction; connections are checked out per query and returned on drop.
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = config
        .pool_options()
        .connect_with(config.connect_options())
        .await
        .map_err(DatabaseError::ConnectionError)?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        db = %config.db_name,
        max_connections = config.max_connections,
        "Connected to PostgreSQL"
    );

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_local_productapp_database() {
        let config = DatabaseConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 6432);
        assert_eq!(config.db_name, "productapp");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.idle_timeout, Duration::from_secs(30));
    }

    #[test]
    fn should_carry_pool_limits_into_pool_options() {
        let config = DatabaseConfig {
            max_connections: 3,
            idle_timeout: Duration::from_secs(5),
            ..DatabaseConfig::default()
        };

        let options = config.pool_options();

        assert_eq!(options.get_max_connections(), 3);
        assert_eq!(options.get_idle_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn should_carry_connection_target_into_connect_options() {
        let options = DatabaseConfig::default().connect_options();

        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 6432);
        assert_eq!(options.get_database(), Some("productapp"));
        assert_eq!(options.get_username(), "postgres");
    }
}
