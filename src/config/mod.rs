#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the default config location.
pub const CONFIG_PATH_ENV: &str = "DASHBOARD_CLIENT_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "./config/client.toml";
pub const DEFAULT_BASE_URL: &str = "http://localhost:9655";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const REDACTED: &str = "<redacted>";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub server: ServerConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout_seconds: None,
                headers: None,
            },
            logging: None,
        }
    }
}

impl ClientConfig {
    /// Reads and parses a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClientError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ClientError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Loads `path`, else `$DASHBOARD_CLIENT_CONFIG`, else the default location.
    /// Only a missing default file falls back to built-in settings.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV) {
            if !env_path.is_empty() {
                return Self::from_file(PathBuf::from(env_path));
            }
        }

        let default_path = Path::new(DEFAULT_CONFIG_PATH);
        if default_path.exists() {
            Self::from_file(default_path)
        } else {
            tracing::debug!("No config file at {}, using defaults", DEFAULT_CONFIG_PATH);
            Ok(Self::default())
        }
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClientError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn base_url(&self) -> &str {
        &self.server.base_url
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.server.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.server
            .headers
            .iter()
            .flatten()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy safe to log: header values are masked.
    pub fn redacted(&self) -> ClientConfig {
        let mut config = self.clone();
        if let Some(headers) = config.server.headers.as_mut() {
            for value in headers.values_mut() {
                *value = REDACTED.to_string();
            }
        }
        config
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("server.base_url", &self.server.base_url)?;

        if let Some(timeout) = self.server.timeout_seconds {
            validation::validate_range("server.timeout_seconds", timeout, 1, 3600)?;
        }

        for (name, value) in self.headers() {
            validation::validate_non_empty_string("server.headers", name)?;
            if value.contains("${") {
                return Err(ClientError::InvalidConfigValueError {
                    field: format!("server.headers.{}", name),
                    value: value.to_string(),
                    reason: "Unresolved environment variable".to_string(),
                });
            }
        }

        Ok(())
    }
}
