//! Action execution descriptor and runtime kinds.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Kind used for custom container images.
pub const BLACKBOX_KIND: &str = "blackbox";
pub const SWIFT_DEFAULT_KIND: &str = "swift:default";
pub const NODEJS_DEFAULT_KIND: &str = "nodejs:default";
pub const PYTHON_DEFAULT_KIND: &str = "python:default";
pub const JAVA_DEFAULT_KIND: &str = "java:default";

/// Image used for docker actions shipped as a zip payload.
pub const DEFAULT_DOCKER_SKELETON: &str = "openwhisk/dockerskeleton";

/// How an action runs on the platform.
///
/// `code` holds inline source, or a base64 zip payload for `.zip` artifacts.
/// `image` is only set for blackbox actions and `main` only when an entry
/// point was given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exec {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
}

/// Map an artifact extension (including the leading dot) to its default kind.
pub fn default_kind_for_extension(ext: &str) -> Option<&'static str> {
    match ext {
        ".swift" => Some(SWIFT_DEFAULT_KIND),
        ".js" => Some(NODEJS_DEFAULT_KIND),
        ".py" => Some(PYTHON_DEFAULT_KIND),
        ".jar" => Some(JAVA_DEFAULT_KIND),
        _ => None,
    }
}

/// When a missing Java entry point is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JavaMainCheck {
    /// Only a kind of exactly `java` requires a main class. Kinds inferred
    /// from `.jar` artifacts are `java:default` and pass unchecked.
    #[default]
    #[display("literal")]
    Literal,
    /// Any kind in the Java family (`java`, `java:*`) requires a main class.
    #[display("runtime-family")]
    RuntimeFamily,
}

impl JavaMainCheck {
    pub fn requires_main(&self, kind: &str) -> bool {
        match self {
            JavaMainCheck::Literal => kind == "java",
            JavaMainCheck::RuntimeFamily => kind == "java" || kind.starts_with("java:"),
        }
    }
}

impl std::str::FromStr for JavaMainCheck {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "literal" => Ok(JavaMainCheck::Literal),
            "runtime-family" => Ok(JavaMainCheck::RuntimeFamily),
            other => Err(Error::InvalidValue {
                field: "java-main-check".to_string(),
                message: format!("expected 'literal' or 'runtime-family', got '{}'", other),
            }),
        }
    }
}

/// Knobs for exec resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverOptions {
    /// Image for docker actions whose artifact is a zip.
    pub docker_skeleton_image: String,
    pub java_main_check: JavaMainCheck,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            docker_skeleton_image: DEFAULT_DOCKER_SKELETON.to_string(),
            java_main_check: JavaMainCheck::default(),
        }
    }
}
