use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// A read-merge-filter job described in TOML.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub inputs: Vec<String>,
    pub output: Option<String>,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default)]
    pub strip_bom: bool,
    pub permissions: Option<String>,
    #[serde(default)]
    pub filter: Vec<Filter>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Filter {
    pub column: String,
    pub rule: String,
    pub value: Option<String>,
    pub values: Option<Vec<String>>,
    pub format: Option<String>,
    pub inclusive: Option<bool>,
}

fn default_delimiter() -> String {
    ",".to_string()
}

pub fn parse_config(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let config_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = toml::from_str(config_str.as_str())
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}
