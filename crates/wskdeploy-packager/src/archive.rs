//! Zip archive construction.
//!
//! Neither builder cleans up after a failure: a partially written archive is
//! left at the destination. Entry names come straight from the filesystem and
//! are not sanitized.

use std::fs::{self, File, Metadata};
use std::io;
use std::path::Path;

use time::OffsetDateTime;
use tracing::{debug, info, warn};
use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::PackagerResult;

/// Zip `src` into `dest`, overwriting it.
///
/// When `src` is a directory every entry is rooted under its base name:
/// for `src = "build/app"`, `build/app/lib/index.js` is stored as
/// `app/lib/index.js`. Directories are stored with a trailing `/`, files are deflated. When `src`
/// is a single file the archive holds just that file under its base name.
pub fn build_directory_archive(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> PackagerResult<()> {
    let src = src.as_ref();
    let dest = dest.as_ref();

    let mut zip = ZipWriter::new(File::create(dest)?);

    let base_dir = if fs::metadata(src)?.is_dir() {
        Some(base_name(src)?)
    } else {
        None
    };

    let mut entries = 0usize;
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let meta = entry.metadata()?;

        let mut name = match &base_dir {
            Some(base) => {
                let relative = entry.path().strip_prefix(src).map_err(io::Error::other)?;
                let mut name = base.clone();
                for component in relative.components() {
                    name.push('/');
                    name.push_str(&component.as_os_str().to_string_lossy());
                }
                name
            }
            None => entry.file_name().to_string_lossy().into_owned(),
        };

        if meta.is_dir() {
            name.push('/');
            debug!(entry = %name, "Adding directory");
            zip.add_directory(name, entry_options(&meta, CompressionMethod::Stored))?;
        } else {
            debug!(entry = %name, "Adding file");
            zip.start_file(name, entry_options(&meta, CompressionMethod::Deflated))?;
            let mut file = File::open(entry.path())?;
            io::copy(&mut file, &mut zip)?;
        }
        entries += 1;
    }

    zip.finish()?;
    info!(src = %src.display(), dest = %dest.display(), entries, "Built directory archive");
    Ok(())
}

/// Zip the given files into `dest`, each at the archive root under its base
/// name and stored without compression.
///
/// Stops at the first file that cannot be added. Entries written before that
/// stay in the archive.
pub fn build_file_set_archive<P: AsRef<Path>>(dest: impl AsRef<Path>, files: &[P]) -> PackagerResult<()> {
    let dest = dest.as_ref();
    let mut zip = ZipWriter::new(File::create(dest)?);

    for path in files {
        if let Err(err) = write_file_to_zip(&mut zip, path.as_ref()) {
            if let Err(finish_err) = zip.finish() {
                warn!(dest = %dest.display(), error = %finish_err, "Failed to finalize partial archive");
            }
            return Err(err);
        }
    }

    zip.finish()?;
    info!(dest = %dest.display(), files = files.len(), "Built file set archive");
    Ok(())
}

fn write_file_to_zip(zip: &mut ZipWriter<File>, path: &Path) -> PackagerResult<()> {
    let mut file = File::open(path)?;
    let meta = file.metadata()?;
    if meta.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' is a directory", path.display()),
        )
        .into());
    }

    let name = base_name(path)?;
    debug!(entry = %name, "Adding file");
    zip.start_file(name, entry_options(&meta, CompressionMethod::Stored))?;
    io::copy(&mut file, zip)?;
    Ok(())
}

fn base_name(path: &Path) -> PackagerResult<String> {
    let name = match path.file_name() {
        Some(name) => name.to_os_string(),
        // "." and ".." have no file name of their own
        None => path
            .canonicalize()?
            .file_name()
            .map(|n| n.to_os_string())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("'{}' has no base name", path.display()),
                )
            })?,
    };
    Ok(name.to_string_lossy().into_owned())
}

fn entry_options(meta: &Metadata, method: CompressionMethod) -> SimpleFileOptions {
    let mut options = SimpleFileOptions::default().compression_method(method);

    // Timestamps zip cannot represent (before 1980) keep the default.
    if let Some(modified) = meta
        .modified()
        .ok()
        .and_then(|t| zip::DateTime::try_from(OffsetDateTime::from(t)).ok())
    {
        options = options.last_modified_time(modified);
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        options = options.unix_permissions(meta.permissions().mode());
    }

    options
}
