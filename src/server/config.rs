use std::path::PathBuf;

use crate::server::error::config::ConfigError;

const DEFAULT_SECRET_KEY: &str = "dev_secret_key_change_in_production";
const DEFAULT_UPLOAD_DIR: &str = "static/uploads";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Credentials for the administrator account configured through the environment.
///
/// Logging in with these bypasses the user table entirely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl AdminCredentials {
    /// Whether `identifier` and `password` match the admin account.
    ///
    /// The identifier may be the admin username or, when one is configured, the admin email
    /// compared case-insensitively.
    pub fn matches(&self, identifier: &str, password: &str) -> bool {
        let identifier_matches = identifier == self.username
            || (!self.email.is_empty() && identifier.eq_ignore_ascii_case(&self.email));

        identifier_matches && password == self.password
    }
}

pub struct Config {
    pub secret_key: String,
    pub database_url: String,
    pub admin: Option<AdminCredentials>,
    pub upload_dir: PathBuf,
    pub bind_address: String,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Blank values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let secret_key = var("SECRET_KEY").unwrap_or_else(|| {
            tracing::warn!("SECRET_KEY is not set, falling back to the development key");
            DEFAULT_SECRET_KEY.to_string()
        });

        let database_url =
            var("DATABASE_URL").ok_or(ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let admin = match (var("ADMIN_USERNAME"), var("ADMIN_PASSWORD")) {
            (Some(username), Some(password)) => Some(AdminCredentials {
                username,
                password,
                email: var("ADMIN_EMAIL").unwrap_or_default().to_lowercase(),
            }),
            (None, None) => None,
            _ => {
                tracing::warn!(
                    "Only one of ADMIN_USERNAME and ADMIN_PASSWORD is set, admin login is disabled"
                );
                None
            }
        };

        let max_upload_bytes = match var("MAX_UPLOAD_BYTES") {
            Some(value) => value
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "MAX_UPLOAD_BYTES".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            secret_key,
            database_url,
            admin,
            upload_dir: PathBuf::from(
                var("UPLOAD_DIR").unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            ),
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            max_upload_bytes,
        })
    }
}
