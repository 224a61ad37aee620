use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {key} value: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// One JSON file per key under `data_dir`.
    File,
    /// Lost on restart.
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub storage: StorageBackend,
    /// Mounts the `/admin` editor routes. Off unless explicitly enabled.
    pub admin_enabled: bool,
    pub environment: String,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`), then reads the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match lookup("PORT") {
            None => 8080,
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: raw,
            })?,
        };

        let data_dir = PathBuf::from(lookup("CMS_DATA_DIR").unwrap_or_else(|| "./cms-data".to_string()));

        let storage = match lookup("CMS_STORAGE").as_deref() {
            None | Some("file") => StorageBackend::File,
            Some("memory") => StorageBackend::Memory,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "CMS_STORAGE",
                    value: other.to_string(),
                })
            }
        };

        let admin_enabled = match lookup("CMS_ADMIN_ENABLED").as_deref() {
            None => false,
            Some(raw) => parse_flag(raw).ok_or_else(|| ConfigError::InvalidValue {
                key: "CMS_ADMIN_ENABLED",
                value: raw.to_string(),
            })?,
        };

        let environment = lookup("RUST_ENV").unwrap_or_else(|| "development".to_string());

        Ok(Self {
            host,
            port,
            data_dir,
            storage,
            admin_enabled,
            environment,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
