//! CLI command implementations.

pub mod archive;
pub mod exec;
pub mod web;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;
use wskdeploy_config::{SystemConfig, load_system_config};
use wskdeploy_core::json::pretty_json;

const DEFAULT_CONFIG_FILE: &str = "wskdeploy.kdl";

/// Load the explicit configuration file, or ./wskdeploy.kdl when present.
pub fn load_config(path: Option<&Path>) -> Result<SystemConfig> {
    let path = match path {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Path::new(DEFAULT_CONFIG_FILE),
        None => {
            debug!("No configuration file, using defaults");
            return Ok(SystemConfig::default());
        }
    };

    load_system_config(path)
        .with_context(|| format!("Failed to load configuration: {}", path.display()))
}

pub fn show_config(mut config: SystemConfig, apihost: Option<String>) -> Result<()> {
    if apihost.is_some() {
        config.apihost = apihost;
    }

    println!("{}", pretty_json(&config)?);
    match config.api_base_url()? {
        Some(url) => println!("API base URL: {}", url),
        None => println!("API base URL: (no apihost configured)"),
    }
    Ok(())
}
