//! Web export annotation reconciliation.
//!
//! A web action is described to the platform by three annotations:
//!
//! | mode     | `web-export` | `raw-http` | `final` |
//! |----------|--------------|------------|---------|
//! | Enabled  | true         | false      | true    |
//! | Disabled | false        | false      | false   |
//! | Raw      | true         | true       | true    |
//!
//! Reconciling strips any existing copies of the three keys and appends fresh
//! entries in the order above, so applying a mode twice gives the same list.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::annotation::{FINAL_ANNOT, KeyValueArr, RAW_HTTP_ANNOT, WEB_EXPORT_ANNOT};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebExportMode {
    #[display("yes")]
    Enabled,
    #[display("no")]
    Disabled,
    #[display("raw")]
    Raw,
}

/// Annotation values for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebFlags {
    pub web_export: bool,
    pub raw_http: bool,
    pub final_: bool,
}

impl WebExportMode {
    pub fn flags(self) -> WebFlags {
        match self {
            WebExportMode::Enabled => WebFlags {
                web_export: true,
                raw_http: false,
                final_: true,
            },
            WebExportMode::Disabled => WebFlags {
                web_export: false,
                raw_http: false,
                final_: false,
            },
            WebExportMode::Raw => WebFlags {
                web_export: true,
                raw_http: true,
                final_: true,
            },
        }
    }
}

impl std::str::FromStr for WebExportMode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yes" | "true" => Ok(WebExportMode::Enabled),
            "no" | "false" => Ok(WebExportMode::Disabled),
            "raw" => Ok(WebExportMode::Raw),
            _ => Err(Error::InvalidWebMode(s.to_string())),
        }
    }
}

/// Parse `mode` and reconcile `annotations` against it.
///
/// Fails with the mode string itself as the message when it is not one of
/// `yes`, `true`, `no`, `false` or `raw` (any case).
pub fn web_action(
    mode: &str,
    annotations: KeyValueArr,
    entity_name: &str,
    fetch: bool,
) -> Result<KeyValueArr> {
    let mode: WebExportMode = mode.parse()?;
    Ok(reconcile(mode, annotations, entity_name, fetch))
}

/// Rewrite the web annotations of `annotations` for `mode`.
///
/// With `fetch` set and nothing to work on yet, the input is returned
/// untouched; the caller reconciles again once annotations were fetched.
pub fn reconcile(
    mode: WebExportMode,
    mut annotations: KeyValueArr,
    entity_name: &str,
    fetch: bool,
) -> KeyValueArr {
    if annotations.is_empty() && fetch {
        debug!(entity = %entity_name, %mode, "Deferring web annotations until fetched");
        return annotations;
    }

    let removed = delete_web_annotation_keys(&mut annotations);
    let flags = mode.flags();
    annotations.add(WEB_EXPORT_ANNOT, flags.web_export);
    annotations.add(RAW_HTTP_ANNOT, flags.raw_http);
    annotations.add(FINAL_ANNOT, flags.final_);

    debug!(entity = %entity_name, %mode, removed, "Reconciled web annotations");
    annotations
}

// Every occurrence goes, so duplicated keys cannot survive a rewrite.
fn delete_web_annotation_keys(annotations: &mut KeyValueArr) -> usize {
    [WEB_EXPORT_ANNOT, RAW_HTTP_ANNOT, FINAL_ANNOT]
        .iter()
        .map(|key| annotations.remove_all(key))
        .sum()
}
