//! Web export command.

use anyhow::{Context, Result};
use serde_json::Value;
use wskdeploy_core::json::{parse_json, pretty_json};
use wskdeploy_core::{KeyValue, KeyValueArr, web_action};

pub fn run(mode: &str, annotations: &[String], name: &str, fetch: bool) -> Result<()> {
    let annotations = annotations
        .iter()
        .map(|raw| parse_annotation(raw))
        .collect::<Result<KeyValueArr>>()?;

    let annotations = web_action(mode, annotations, name, fetch)
        .with_context(|| format!("Invalid web export mode for {}", name))?;

    println!("{}", pretty_json(&annotations)?);
    Ok(())
}

/// Parse `key=value`. The value is JSON when it parses as such, a string otherwise.
fn parse_annotation(raw: &str) -> Result<KeyValue> {
    let (key, value) = raw
        .split_once('=')
        .with_context(|| format!("Annotation '{}' must be key=value", raw))?;
    let value = parse_json(value).unwrap_or_else(|| Value::String(value.to_string()));
    Ok(KeyValue::new(key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_annotation_values() {
        assert_eq!(
            parse_annotation("web-export=true").unwrap(),
            KeyValue::new("web-export", true)
        );
        assert_eq!(
            parse_annotation("owner=team-a").unwrap(),
            KeyValue::new("owner", "team-a")
        );
        assert_eq!(
            parse_annotation("limits={\"memory\":256}").unwrap().value,
            json!({"memory": 256})
        );
    }

    #[test]
    fn test_parse_annotation_requires_separator() {
        assert!(parse_annotation("web-export").is_err());
    }
}
