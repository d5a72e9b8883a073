pub mod app_config;
pub mod database_config;
pub mod server_config;

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("config.invalid_value: {key}={value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Reads `key` through `lookup`, falling back to `default` when unset.
///
/// A present but unparsable value is an error naming the variable.
pub fn parse_var<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fall_back_to_default_when_unset() {
        let lookup = |_: &str| None;
        assert_eq!(parse_var(&lookup, "DB_PORT", 6432u16), Ok(6432));
    }

    #[test]
    fn should_parse_present_value() {
        let lookup = |_: &str| Some(" 5432 ".to_string());
        assert_eq!(parse_var(&lookup, "DB_PORT", 6432u16), Ok(5432));
    }

    #[test]
    fn should_name_variable_when_value_is_invalid() {
        let lookup = |_: &str| Some("many".to_string());
        assert_eq!(
            parse_var(&lookup, "DB_MAX_CONNECTIONS", 10u32),
            Err(ConfigError::InvalidValue {
                key: "DB_MAX_CONNECTIONS",
                value: "many".to_string(),
            })
        );
    }
}
