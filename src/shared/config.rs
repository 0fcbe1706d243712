use std::env;
use std::path::PathBuf;

pub const DEFAULT_MONGODB_URI: &str = "mongodb://127.0.0.1:27017/amcho_pasro";
pub const DEFAULT_MONGODB_DB_NAME: &str = "amcho_pasro";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MEDIA_BUCKET: &str = "amcho-pasro-media";
pub const DEFAULT_STATIC_ROOT: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoConfig {
    pub uri: String,
    pub db_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaConfig {
    pub bucket_name: String,
    pub static_root: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mongo: MongoConfig,
    pub server: ServerConfig,
    pub media: MediaConfig,
}

/// Loads `.env.{RUST_ENV}` first and falls back to `.env`.
pub fn load_env_files() {
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "PORT",
                    value: raw.clone(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            mongo: MongoConfig {
                uri: get("MONGODB_URI").unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string()),
                db_name: get("MONGODB_DB_NAME")
                    .unwrap_or_else(|| DEFAULT_MONGODB_DB_NAME.to_string()),
            },
            server: ServerConfig {
                host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
            },
            media: MediaConfig {
                bucket_name: get("MEDIA_BUCKET")
                    .unwrap_or_else(|| DEFAULT_MEDIA_BUCKET.to_string()),
                static_root: PathBuf::from(
                    get("STATIC_ROOT").unwrap_or_else(|| DEFAULT_STATIC_ROOT.to_string()),
                ),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
