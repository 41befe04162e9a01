use serde::Deserialize;

/// Main configuration structure for Link-Harvester
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub fetch: FetchConfig,
    pub worker: WorkerConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to (e.g. "127.0.0.1:8000")
    #[serde(rename = "bind-address")]
    pub bind_address: String,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,
}

/// Outbound fetch configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// User agent string sent with every harvest request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Total request timeout in seconds
    #[serde(rename = "timeout-seconds")]
    pub timeout_seconds: u64,

    /// Connect timeout in seconds
    #[serde(rename = "connect-timeout-seconds")]
    pub connect_timeout_seconds: u64,
}

/// Background worker configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WorkerConfig {
    /// Number of worker tasks draining the harvest queue
    pub count: u32,

    /// Capacity of the bounded harvest job queue
    #[serde(rename = "queue-capacity")]
    pub queue_capacity: u32,
}
