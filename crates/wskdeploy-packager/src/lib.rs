//! Artifact packaging and runtime resolution for wskdeploy.
//!
//! - `archive` builds zip bundles from a directory or a list of files
//! - `exec` turns an artifact into an action execution descriptor
//! - `reader` loads artifact content

pub mod archive;
pub mod error;
pub mod exec;
pub mod reader;

pub use archive::{build_directory_archive, build_file_set_archive};
pub use error::{PackagerError, PackagerResult};
pub use exec::{ExecResolver, resolve_exec};
pub use reader::{ContentReader, LocalContentReader};
