//! Configuration for the login backend.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Message Central provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,

    /// User registry storage configuration
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Frontend serving configuration
    #[serde(default)]
    pub frontend: FrontendConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Message Central CPaaS base URL
    #[serde(default = "default_provider_base_url")]
    pub base_url: String,

    /// Account auth token, sent as the `authToken` header
    #[serde(default)]
    pub auth_token: String,

    /// Account customer id, sent as the `customerId` query parameter
    #[serde(default)]
    pub customer_id: String,

    /// Country code for the OTP flow; the deployment targets Indian
    /// numbers, so "91" is both the query parameter and the prefix
    /// stripped during normalization
    #[serde(default = "default_country_code")]
    pub country_code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Path to the users JSON file
    #[serde(default = "default_registry_path")]
    pub path: PathBuf,

    /// Enable persistence (if false, registry is in-memory only)
    #[serde(default = "default_true")]
    pub persist: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FrontendConfig {
    /// Directory holding the built frontend (index.html + static/)
    #[serde(default = "default_build_dir")]
    pub build_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default implementations
impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_provider_base_url(),
            auth_token: String::new(),
            customer_id: String::new(),
            country_code: default_country_code(),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            path: default_registry_path(),
            persist: true,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            build_dir: default_build_dir(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_provider_base_url() -> String {
    "https://cpaas.messagecentral.com".into()
}

fn default_country_code() -> String {
    "91".into()
}

fn default_registry_path() -> PathBuf {
    PathBuf::from("Users.json")
}

fn default_true() -> bool {
    true
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8000
}

fn default_build_dir() -> PathBuf {
    PathBuf::from("frontend-src/build")
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
