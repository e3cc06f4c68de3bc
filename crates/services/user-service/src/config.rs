//! User service configuration.

use std::env;
use std::fmt;

use clap::ValueEnum;
use common::{DatabaseConfig, EventBusConfig, ServiceConfig};

/// Default HTTP port of the user service
pub const DEFAULT_PORT: u16 = 3000;

/// Storage backing the repository port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RepositoryBackend {
    /// SeaORM over PostgreSQL
    Postgres,
    /// Process-local map, lost on restart
    Memory,
}

impl RepositoryBackend {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Memory => "memory",
        }
    }
}

impl fmt::Display for RepositoryBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery mechanism behind the event publisher port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PublisherBackend {
    /// Redis pub/sub channel
    Redis,
    /// Structured log record only
    Log,
    /// Kept in process memory
    Memory,
}

impl PublisherBackend {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Redis => "redis",
            Self::Log => "log",
            Self::Memory => "memory",
        }
    }
}

impl fmt::Display for PublisherBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// HTTP listener settings
    pub service: ServiceConfig,
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Event bus settings
    pub events: EventBusConfig,
    /// Selected repository implementation
    pub repository: RepositoryBackend,
    /// Selected event publisher implementation
    pub publisher: PublisherBackend,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                service_name: defaults.service.service_name,
                host: env::var("USER_SERVICE_HOST").unwrap_or(defaults.service.host),
                port: env::var("USER_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.service.port),
            },
            database: DatabaseConfig {
                url: env::var("USER_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(defaults.database.max_connections),
                min_connections: defaults.database.min_connections,
            },
            events: EventBusConfig {
                url: env::var("USER_SERVICE_REDIS_URL")
                    .or_else(|_| env::var("REDIS_URL"))
                    .unwrap_or(defaults.events.url),
                channel: env::var("USER_EVENTS_CHANNEL").unwrap_or(defaults.events.channel),
            },
            repository: env::var("USER_REPOSITORY")
                .ok()
                .and_then(|v| RepositoryBackend::from_str(&v, true).ok())
                .unwrap_or(defaults.repository),
            publisher: env::var("USER_EVENT_PUBLISHER")
                .ok()
                .and_then(|v| PublisherBackend::from_str(&v, true).ok())
                .unwrap_or(defaults.publisher),
        }
    }

    /// Self-contained configuration: in-memory storage, in-memory events.
    pub fn in_memory() -> Self {
        Self {
            repository: RepositoryBackend::Memory,
            publisher: PublisherBackend::Memory,
            ..Self::default()
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "user-service".to_string(),
                host: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
            },
            database: DatabaseConfig::default(),
            events: EventBusConfig::default(),
            repository: RepositoryBackend::Postgres,
            publisher: PublisherBackend::Redis,
        }
    }
}
