//! Environment variable references in parameter values.
//!
//! A string value starting with `$` names an environment variable:
//! - `$API_KEY` resolves to the value of `API_KEY`
//! - when the variable is unset or empty, the bare name (`API_KEY`) is used
//! - only the first name counts, so `$A$B` refers to `A`
//!
//! Any other value is passed through unchanged.

use serde_json::Value;
use std::collections::HashMap;
use wskdeploy_core::{KeyValue, KeyValueArr};

/// Source of environment variable values.
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// A parameter value as written by the user.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Literal(Value),
    EnvReference(String),
}

impl ParamValue {
    /// Classify a raw value.
    pub fn from_raw(value: Value) -> Self {
        match value {
            Value::String(s) if s.starts_with('$') => {
                let name = s[1..].split('$').next().unwrap_or_default();
                ParamValue::EnvReference(name.to_string())
            }
            other => ParamValue::Literal(other),
        }
    }

    pub fn resolve(&self, env: &impl EnvSource) -> Value {
        match self {
            ParamValue::Literal(value) => value.clone(),
            ParamValue::EnvReference(name) => {
                let value = env
                    .var(name)
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| name.clone());
                Value::String(value)
            }
        }
    }
}

/// Resolve every value of `params` against `env`.
pub fn resolve_parameters(params: &KeyValueArr, env: &impl EnvSource) -> KeyValueArr {
    params
        .iter()
        .map(|kv| {
            let value = ParamValue::from_raw(kv.value.clone()).resolve(env);
            KeyValue::new(kv.key.clone(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_classify_values() {
        assert_eq!(
            ParamValue::from_raw(json!("$HOME")),
            ParamValue::EnvReference("HOME".to_string())
        );
        assert_eq!(
            ParamValue::from_raw(json!("plain")),
            ParamValue::Literal(json!("plain"))
        );
        assert_eq!(ParamValue::from_raw(json!(3)), ParamValue::Literal(json!(3)));
    }

    #[test]
    fn test_only_first_name_counts() {
        assert_eq!(
            ParamValue::from_raw(json!("$A$B")),
            ParamValue::EnvReference("A".to_string())
        );
        assert_eq!(
            ParamValue::from_raw(json!("$")),
            ParamValue::EnvReference(String::new())
        );
    }

    #[test]
    fn test_resolve_set_variable() {
        let env = env(&[("USERNAME", "alice")]);
        let value = ParamValue::from_raw(json!("$USERNAME")).resolve(&env);
        assert_eq!(value, json!("alice"));
    }

    #[test]
    fn test_unset_or_empty_falls_back_to_name() {
        let env = env(&[("EMPTY", "")]);
        assert_eq!(
            ParamValue::from_raw(json!("$EMPTY")).resolve(&env),
            json!("EMPTY")
        );
        assert_eq!(
            ParamValue::from_raw(json!("$MISSING")).resolve(&env),
            json!("MISSING")
        );
    }

    #[test]
    fn test_resolve_parameters_keeps_order() {
        let env = env(&[("PLACE", "Vermont")]);
        let params: KeyValueArr = vec![
            KeyValue::new("name", "Bernie"),
            KeyValue::new("place", "$PLACE"),
            KeyValue::new("count", 2),
        ]
        .into();

        let resolved = resolve_parameters(&params, &env);
        assert_eq!(resolved.keys().collect::<Vec<_>>(), vec!["name", "place", "count"]);
        assert_eq!(resolved.get("place"), Some(&json!("Vermont")));
        assert_eq!(resolved.get("count"), Some(&json!(2)));
    }
}
