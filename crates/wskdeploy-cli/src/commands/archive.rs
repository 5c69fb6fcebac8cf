//! Archive commands.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use wskdeploy_packager::{build_directory_archive, build_file_set_archive};

pub fn zip_dir(src: &Path, dest: &Path) -> Result<()> {
    build_directory_archive(src, dest)
        .with_context(|| format!("Failed to archive {}", src.display()))?;
    println!("Wrote {}", dest.display());
    Ok(())
}

pub fn zip_files(dest: &Path, files: &[PathBuf]) -> Result<()> {
    build_file_set_archive(dest, files)
        .with_context(|| format!("Failed to write {}", dest.display()))?;
    println!("Wrote {} ({} files)", dest.display(), files.len());
    Ok(())
}
