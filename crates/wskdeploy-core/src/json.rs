//! JSON helpers: value kind naming, detection and pretty printing.

use derive_more::Display;
use serde::Serialize;
use serde_json::Value;

use crate::Result;

/// JSON schema type name of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum JsonKind {
    #[display("null")]
    Null,
    #[display("boolean")]
    Boolean,
    #[display("integer")]
    Integer,
    #[display("number")]
    Number,
    #[display("string")]
    String,
    #[display("array")]
    Array,
    #[display("object")]
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => JsonKind::Integer,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Integer => "integer",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

pub fn json_type_name(value: &Value) -> &'static str {
    JsonKind::of(value).as_str()
}

/// Parse `s` as JSON, returning `None` when it is not valid JSON.
pub fn parse_json(s: &str) -> Option<Value> {
    serde_json::from_str(s).ok()
}

pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
