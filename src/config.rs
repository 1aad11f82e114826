// http.port is resolved in order:
//
// HTTP_PORT env var
// "http.port" key of the json file named by CONFIG_FILE
// 8080

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::path::Path;

pub const DEFAULT_HTTP_PORT: u16 = 8080;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub http_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port_var = std::env::var("HTTP_PORT").ok();
        let config_file = std::env::var("CONFIG_FILE").ok();
        Self::resolve(port_var.as_deref(), config_file.as_deref().map(Path::new))
    }

    fn resolve(port_var: Option<&str>, config_file: Option<&Path>) -> Result<Self> {
        if let Some(port) = port_var {
            let http_port = port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("HTTP_PORT {:?} is not a port number", port))?;
            return Ok(Config { http_port });
        }

        if let Some(path) = config_file {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("read config file {} failed", path.display()))?;
            return Self::from_json(&content)
                .with_context(|| format!("parse config file {} failed", path.display()));
        }

        Ok(Config::default())
    }

    fn from_json(content: &str) -> Result<Self> {
        let json: Value = serde_json::from_str(content)?;
        let http_port = match json.get("http.port") {
            None | Some(Value::Null) => DEFAULT_HTTP_PORT,
            Some(value) => value
                .as_u64()
                .and_then(|port| u16::try_from(port).ok())
                .ok_or_else(|| anyhow!("http.port {} is not a port number", value))?,
        };
        Ok(Config { http_port })
    }
}
