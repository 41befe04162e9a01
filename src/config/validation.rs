use crate::config::types::{Config, FetchConfig, ServerConfig, StorageConfig, WorkerConfig};
use crate::ConfigError;
use std::net::SocketAddr;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_server_config(&config.server)?;
    validate_storage_config(&config.storage)?;
    validate_fetch_config(&config.fetch)?;
    validate_worker_config(&config.worker)?;
    Ok(())
}

/// Validates server configuration
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config
        .bind_address
        .parse::<SocketAddr>()
        .map_err(|e| {
            ConfigError::Validation(format!(
                "bind_address '{}' is not a valid socket address: {}",
                config.bind_address, e
            ))
        })?;

    Ok(())
}

/// Validates storage configuration
fn validate_storage_config(config: &StorageConfig) -> Result<(), ConfigError> {
    if config.database_path.is_empty() {
        return Err(ConfigError::Validation(
            "database_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_seconds < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_seconds must be >= 1, got {}",
            config.timeout_seconds
        )));
    }

    if config.connect_timeout_seconds < 1 {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_seconds must be >= 1, got {}",
            config.connect_timeout_seconds
        )));
    }

    Ok(())
}

/// Validates worker configuration
fn validate_worker_config(config: &WorkerConfig) -> Result<(), ConfigError> {
    if config.count < 1 || config.count > 64 {
        return Err(ConfigError::Validation(format!(
            "worker count must be between 1 and 64, got {}",
            config.count
        )));
    }

    if config.queue_capacity < 1 {
        return Err(ConfigError::Validation(format!(
            "queue_capacity must be >= 1, got {}",
            config.queue_capacity
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            server: ServerConfig {
                bind_address: "127.0.0.1:8000".to_string(),
            },
            storage: StorageConfig {
                database_path: "./links.db".to_string(),
            },
            fetch: FetchConfig {
                user_agent: "LinkHarvester/0.1".to_string(),
                timeout_seconds: 30,
                connect_timeout_seconds: 10,
            },
            worker: WorkerConfig {
                count: 2,
                queue_capacity: 256,
            },
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_invalid_bind_address() {
        let mut config = valid_config();
        config.server.bind_address = "not-an-address".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_database_path() {
        let mut config = valid_config();
        config.storage.database_path = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_user_agent() {
        let mut config = valid_config();
        config.fetch.user_agent = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_timeout() {
        let mut config = valid_config();
        config.fetch.timeout_seconds = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_worker_count() {
        let mut config = valid_config();
        config.worker.count = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_excessive_worker_count() {
        let mut config = valid_config();
        config.worker.count = 1000;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_queue_capacity() {
        let mut config = valid_config();
        config.worker.queue_capacity = 0;
        assert!(validate(&config).is_err());
    }
}
