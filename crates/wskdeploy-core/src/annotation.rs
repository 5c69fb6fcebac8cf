//! Annotation key/value collections.

use derive_more::From;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const WEB_EXPORT_ANNOT: &str = "web-export";
pub const RAW_HTTP_ANNOT: &str = "raw-http";
pub const FINAL_ANNOT: &str = "final";
pub const FEED_ANNOT: &str = "feed";

/// A single annotation or parameter entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    pub value: Value,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered list of key/value entries. Keys are not required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, From)]
#[serde(transparent)]
pub struct KeyValueArr(Vec<KeyValue>);

impl KeyValueArr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeyValue> {
        self.0.iter()
    }

    /// Append an entry at the end.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.push(KeyValue::new(key, value));
    }

    /// Value of the first entry with `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|kv| kv.key == key).map(|kv| &kv.value)
    }

    /// Remove every entry with `key`. Returns how many were dropped.
    pub fn remove_all(&mut self, key: &str) -> usize {
        let before = self.0.len();
        self.0.retain(|kv| kv.key != key);
        before - self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|kv| kv.key.as_str())
    }
}

impl FromIterator<KeyValue> for KeyValueArr {
    fn from_iter<I: IntoIterator<Item = KeyValue>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for KeyValueArr {
    type Item = KeyValue;
    type IntoIter = std::vec::IntoIter<KeyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeyValueArr {
    type Item = &'a KeyValue;
    type IntoIter = std::slice::Iter<'a, KeyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> KeyValueArr {
        vec![
            KeyValue::new("a", 1),
            KeyValue::new("b", "two"),
            KeyValue::new("a", 3),
        ]
        .into()
    }

    #[test]
    fn test_get_returns_first_match() {
        let arr = sample();
        assert_eq!(arr.get("a"), Some(&json!(1)));
        assert_eq!(arr.get("missing"), None);
    }

    #[test]
    fn test_remove_all() {
        let mut arr = sample();
        assert_eq!(arr.remove_all("a"), 2);
        assert_eq!(arr.keys().collect::<Vec<_>>(), vec!["b"]);
        assert_eq!(arr.remove_all("a"), 0);
    }

    #[test]
    fn test_wire_format_is_plain_list() {
        let mut arr = KeyValueArr::new();
        arr.add(WEB_EXPORT_ANNOT, true);
        let json = serde_json::to_value(&arr).unwrap();
        assert_eq!(json, json!([{"key": "web-export", "value": true}]));

        let back: KeyValueArr = serde_json::from_value(json).unwrap();
        assert_eq!(back, arr);
    }
}
