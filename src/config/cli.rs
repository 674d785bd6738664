use crate::config::ClientConfig;
use crate::utils::error::{ClientError, Result};
use clap::Parser;
use serde_json::{Map, Value};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "dashboard-client")]
#[command(about = "List the meshes registered with an Istio dashboard server")]
pub struct CliArgs {
    #[arg(long, help = "Path to the client TOML config")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Dashboard server base URL (overrides config)")]
    pub base_url: Option<String>,

    #[arg(long, help = "Request timeout in seconds (overrides config)")]
    pub timeout: Option<u64>,

    #[arg(
        long = "param",
        value_name = "KEY=VALUE",
        help = "Filter parameter; repeat for more. Values are parsed as JSON when possible"
    )]
    pub params: Vec<String>,

    #[arg(long, help = "Print the raw response body")]
    pub raw: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_log: bool,
}

impl CliArgs {
    /// Applies flag overrides on top of a loaded config.
    pub fn apply_to(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(base_url) = &self.base_url {
            config.server.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.server.timeout_seconds = Some(timeout);
        }
        config
    }

    /// Builds the filter object from `--param` flags; `None` when none were given.
    pub fn parameter(&self) -> Result<Option<Value>> {
        if self.params.is_empty() {
            return Ok(None);
        }

        let mut object = Map::new();
        for param in &self.params {
            let (key, raw) =
                param
                    .split_once('=')
                    .ok_or_else(|| ClientError::InvalidConfigValueError {
                        field: "--param".to_string(),
                        value: param.clone(),
                        reason: "Expected KEY=VALUE".to_string(),
                    })?;

            if key.is_empty() {
                return Err(ClientError::InvalidConfigValueError {
                    field: "--param".to_string(),
                    value: param.clone(),
                    reason: "Parameter name cannot be empty".to_string(),
                });
            }

            let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
            object.insert(key.to_string(), value);
        }

        Ok(Some(Value::Object(object)))
    }
}
