//! Configuration for wskdeploy.
//!
//! This crate handles:
//! - Tool configuration (wskdeploy.kdl)
//! - API host to base URL derivation
//! - Environment variable references in parameter values

pub mod error;
pub mod system;
pub mod variables;

pub use error::{ConfigError, ConfigResult};
pub use system::{SystemConfig, api_base_url, load_system_config, parse_system_config};
pub use variables::{EnvSource, ParamValue, ProcessEnv, resolve_parameters};
