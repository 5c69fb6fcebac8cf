//! Core domain types for wskdeploy.
//!
//! This crate contains:
//! - The action execution descriptor (`Exec`) and runtime kind constants
//! - Annotation key/value collections
//! - Whisk entity shapes and deployment records
//! - Web export annotation reconciliation
//! - JSON value kind naming

pub mod annotation;
pub mod entity;
pub mod error;
pub mod exec;
pub mod json;
pub mod web;

pub use annotation::{KeyValue, KeyValueArr};
pub use error::{Error, Result};
pub use exec::{Exec, JavaMainCheck, ResolverOptions};
pub use web::{WebExportMode, web_action};
