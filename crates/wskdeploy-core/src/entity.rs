//! Whisk entities and the records that tie them to a deployment plan.
//!
//! Records compare and hash by owning package and entity name, so a plan can
//! hold them in sets without caring about the rest of their contents.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

use crate::annotation::{FEED_ANNOT, KeyValueArr};
use crate::exec::Exec;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exec: Option<Exec>,
    #[serde(default)]
    pub annotations: KeyValueArr,
    #[serde(default)]
    pub parameters: KeyValueArr,
}

impl Action {
    pub fn new(name: impl Into<String>, exec: Exec) -> Self {
        Self {
            name: name.into(),
            exec: Some(exec),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default)]
    pub annotations: KeyValueArr,
    #[serde(default)]
    pub parameters: KeyValueArr,
}

impl Trigger {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Name of the feed action backing this trigger, if any.
    pub fn feed(&self) -> Option<&str> {
        self.annotations.get(FEED_ANNOT).and_then(|v| v.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub trigger: String,
    pub action: String,
}

/// An action together with its package and the source file it came from.
#[derive(Debug, Clone)]
pub struct ActionRecord {
    pub action: Action,
    pub package_name: String,
    pub file_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct TriggerRecord {
    pub trigger: Trigger,
    pub package_name: String,
}

#[derive(Debug, Clone)]
pub struct RuleRecord {
    pub rule: Rule,
    pub package_name: String,
}

macro_rules! record_identity {
    ($record:ty, $entity:ident) => {
        impl PartialEq for $record {
            fn eq(&self, other: &Self) -> bool {
                self.package_name == other.package_name && self.$entity.name == other.$entity.name
            }
        }

        impl Eq for $record {}

        impl Hash for $record {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.package_name.hash(state);
                self.$entity.name.hash(state);
            }
        }
    };
}

record_identity!(ActionRecord, action);
record_identity!(TriggerRecord, trigger);
record_identity!(RuleRecord, rule);
