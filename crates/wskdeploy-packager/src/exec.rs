//! Runtime kind resolution for action artifacts.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;
use tracing::debug;
use wskdeploy_core::exec::{BLACKBOX_KIND, default_kind_for_extension};
use wskdeploy_core::{Error, Exec, ResolverOptions};

use crate::reader::{ContentReader, LocalContentReader};
use crate::{PackagerError, PackagerResult};

const ZIP_EXT: &str = ".zip";
const JAR_EXT: &str = ".jar";

/// Builds execution descriptors from artifacts.
#[derive(Debug, Clone, Default)]
pub struct ExecResolver<R = LocalContentReader> {
    reader: R,
    options: ResolverOptions,
}

impl ExecResolver<LocalContentReader> {
    /// Resolver reading artifacts from the local filesystem.
    pub fn new(options: ResolverOptions) -> Self {
        Self {
            reader: LocalContentReader,
            options,
        }
    }
}

impl<R: ContentReader> ExecResolver<R> {
    pub fn with_reader(reader: R, options: ResolverOptions) -> Self {
        Self { reader, options }
    }

    /// Resolve `artifact` into an [`Exec`].
    ///
    /// Empty `kind` and `main_entry` mean "not given". The first matching rule
    /// picks the kind:
    /// 1. an explicit `kind`
    /// 2. `is_docker`: `blackbox`, with the artifact as image (or the docker
    ///    skeleton image for a `.zip` artifact)
    /// 3. the artifact extension (`.swift`, `.js`, `.py`, `.jar`)
    ///
    /// Content is read unless the action is a docker image, and `.zip`
    /// content is always base64 encoded. `.jar` actions inferred from the
    /// extension carry no code.
    pub fn resolve(
        &self,
        artifact: &str,
        kind: &str,
        is_docker: bool,
        main_entry: &str,
    ) -> PackagerResult<Exec> {
        let ext = extension(artifact);
        let is_zip = ext == ZIP_EXT;

        let mut content = if !is_docker || is_zip {
            let bytes = self
                .reader
                .read_local(Path::new(artifact))
                .map_err(|source| PackagerError::ContentRead {
                    path: artifact.to_string(),
                    source,
                })?;
            Some(bytes)
        } else {
            None
        };

        let mut exec = Exec::default();

        if !kind.is_empty() {
            exec.kind = kind.to_string();
        } else if is_docker {
            exec.kind = BLACKBOX_KIND.to_string();
            exec.image = Some(if is_zip {
                self.options.docker_skeleton_image.clone()
            } else {
                artifact.to_string()
            });
        } else if let Some(default_kind) = default_kind_for_extension(ext) {
            exec.kind = default_kind.to_string();
            if ext == JAR_EXT {
                content = None;
            }
        } else if is_zip {
            return Err(Error::ZipKindRequired.into());
        } else {
            return Err(Error::UnsupportedRuntime(ext.to_string()).into());
        }

        if !main_entry.is_empty() {
            exec.main = Some(main_entry.to_string());
        } else if self.options.java_main_check.requires_main(&exec.kind) {
            return Err(Error::JavaMainRequired.into());
        }

        exec.code = match content {
            None => None,
            Some(bytes) if is_zip => Some(STANDARD.encode(bytes)),
            Some(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        };

        debug!(
            artifact,
            kind = %exec.kind,
            image = ?exec.image,
            has_code = exec.code.is_some(),
            "Resolved exec"
        );
        Ok(exec)
    }
}

/// Resolve `artifact` against the local filesystem with default options.
pub fn resolve_exec(
    artifact: &str,
    kind: &str,
    is_docker: bool,
    main_entry: &str,
) -> PackagerResult<Exec> {
    ExecResolver::new(ResolverOptions::default()).resolve(artifact, kind, is_docker, main_entry)
}

/// Extension of the last path element, including the dot; empty when none.
fn extension(artifact: &str) -> &str {
    let file = artifact.rsplit('/').next().unwrap_or(artifact);
    match file.rfind('.') {
        Some(idx) => &file[idx..],
        None => "",
    }
}
