use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::models::catalog::Catalog;
use crate::models::faculty::{FacultyRepository, SeedFacultyRepository};
use crate::models::password::PasswordHasher;
use crate::models::users::{InMemoryUserRepository, UserRepository};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub registration: RegistrationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Env,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RegistrationConfig {
    pub hash_cost: u32,
}

/// Deployment environment flag controlling error verbosity.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Env {
    Production,
    Development,
}

impl Env {
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("CAMPUS"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.environment", "production")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("registration.hash_cost", 10)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Shared application state: configuration, seed catalog, and the
/// user/faculty datastores. Per-request state never lives here.
pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
    pub faculty: Arc<dyn FacultyRepository>,
    pub users: Arc<dyn UserRepository>,
    pub hasher: PasswordHasher,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let hasher = PasswordHasher::new(config.registration.hash_cost);
        Self {
            catalog: Catalog::seed(),
            faculty: Arc::new(SeedFacultyRepository::seed()),
            users: Arc::new(InMemoryUserRepository::new()),
            hasher,
            config,
        }
    }
}
