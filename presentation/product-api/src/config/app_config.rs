use std::env;

use persistence::db::DatabaseConfig;
use persistence::product::repository::BulkReadPolicy;

use super::ConfigError;
use super::database_config::{load_bulk_read_policy, load_database_config};
use super::server_config::ServerConfig;

pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub bulk_read_policy: BulkReadPolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerConfig::from_lookup(lookup)?,
            database: load_database_config(lookup)?,
            bulk_read_policy: load_bulk_read_policy(lookup)?,
        })
    }
}
