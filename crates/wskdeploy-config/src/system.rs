//! Tool configuration parsing.
//!
//! ```kdl
//! apihost "openwhisk.example.com"
//! namespace "guest"
//! docker-skeleton "openwhisk/dockerskeleton"
//! java-main-check "literal"
//! ```

use crate::{ConfigError, ConfigResult};
use kdl::{KdlDocument, KdlNode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use url::Url;
use wskdeploy_core::{JavaMainCheck, ResolverOptions};

/// Tool-wide configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Platform API host, with or without scheme.
    pub apihost: Option<String>,
    pub namespace: Option<String>,
    /// Exec resolution settings.
    pub resolver: ResolverOptions,
}

impl SystemConfig {
    /// Base URL of the platform API, if a host is configured.
    pub fn api_base_url(&self) -> ConfigResult<Option<Url>> {
        self.apihost.as_deref().map(api_base_url).transpose()
    }
}

/// Parse tool configuration from KDL text. Unknown nodes are ignored.
pub fn parse_system_config(kdl: &str) -> ConfigResult<SystemConfig> {
    let doc: KdlDocument = kdl.parse()?;

    let mut config = SystemConfig::default();
    let mut seen = HashSet::new();

    for node in doc.nodes() {
        let name = node.name().value();
        match name {
            "apihost" => {
                config.apihost = Some(single_string(node, &mut seen)?);
            }
            "namespace" => {
                config.namespace = Some(single_string(node, &mut seen)?);
            }
            "docker-skeleton" => {
                let image = single_string(node, &mut seen)?;
                if image.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        field: name.to_string(),
                        message: "image must not be empty".to_string(),
                    });
                }
                config.resolver.docker_skeleton_image = image;
            }
            "java-main-check" => {
                let value = single_string(node, &mut seen)?;
                config.resolver.java_main_check =
                    value
                        .parse::<JavaMainCheck>()
                        .map_err(|e| ConfigError::InvalidValue {
                            field: name.to_string(),
                            message: e.to_string(),
                        })?;
            }
            _ => {} // Ignore unknown nodes
        }
    }

    Ok(config)
}

/// Read and parse a configuration file.
pub fn load_system_config(path: impl AsRef<Path>) -> ConfigResult<SystemConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_system_config(&content)
}

/// Build the API base URL for `host`.
///
/// `<host>/api` is used as is when it already carries a scheme and a host,
/// otherwise `https://` is assumed.
pub fn api_base_url(host: &str) -> ConfigResult<Url> {
    let base = format!("{}/api", host);
    if let Ok(url) = Url::parse(&base) {
        if url.host_str().is_some_and(|h| !h.is_empty()) {
            return Ok(url);
        }
    }

    Ok(Url::parse(&format!("https://{}/api", host))?)
}

fn single_string<'a>(node: &'a KdlNode, seen: &mut HashSet<&'a str>) -> ConfigResult<String> {
    let name = node.name().value();
    if !seen.insert(name) {
        return Err(ConfigError::Duplicate(name.to_string()));
    }

    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_string())
        .map(|s| s.to_string())
        .ok_or_else(|| ConfigError::MissingField(format!("{} value", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let kdl = r#"
            apihost "openwhisk.example.com"
            namespace "guest"
            docker-skeleton "acme/skeleton:1.0"
            java-main-check "runtime-family"
        "#;

        let config = parse_system_config(kdl).unwrap();
        assert_eq!(config.apihost.as_deref(), Some("openwhisk.example.com"));
        assert_eq!(config.namespace.as_deref(), Some("guest"));
        assert_eq!(config.resolver.docker_skeleton_image, "acme/skeleton:1.0");
        assert_eq!(
            config.resolver.java_main_check,
            JavaMainCheck::RuntimeFamily
        );
    }

    #[test]
    fn test_defaults_when_empty() {
        let config = parse_system_config("").unwrap();
        assert_eq!(config, SystemConfig::default());
        assert_eq!(
            config.resolver.docker_skeleton_image,
            "openwhisk/dockerskeleton"
        );
        assert_eq!(config.resolver.java_main_check, JavaMainCheck::Literal);
        assert!(config.api_base_url().unwrap().is_none());
    }

    #[test]
    fn test_unknown_nodes_ignored() {
        let config = parse_system_config(r#"colour "blue""#).unwrap();
        assert_eq!(config, SystemConfig::default());
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let kdl = r#"
            apihost "a.example.com"
            apihost "b.example.com"
        "#;
        assert!(matches!(
            parse_system_config(kdl).unwrap_err(),
            ConfigError::Duplicate(_)
        ));
    }

    #[test]
    fn test_missing_value_rejected() {
        assert!(matches!(
            parse_system_config("namespace").unwrap_err(),
            ConfigError::MissingField(_)
        ));
    }

    #[test]
    fn test_invalid_java_check_rejected() {
        let err = parse_system_config(r#"java-main-check "sometimes""#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_empty_skeleton_rejected() {
        let err = parse_system_config(r#"docker-skeleton """#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_api_base_url_adds_https() {
        let url = api_base_url("openwhisk.example.com").unwrap();
        assert_eq!(url.as_str(), "https://openwhisk.example.com/api");
    }

    #[test]
    fn test_api_base_url_keeps_scheme() {
        let url = api_base_url("http://localhost:3233").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3233/api");
    }

    #[test]
    fn test_api_base_url_host_with_port() {
        let url = api_base_url("localhost:3233").unwrap();
        assert_eq!(url.as_str(), "https://localhost:3233/api");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_system_config("/nonexistent/wskdeploy.kdl").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
