//! Artifact content loading.

use std::io;
use std::path::Path;

/// Loads the full content of an artifact.
pub trait ContentReader {
    fn read_local(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Reads artifacts from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalContentReader;

impl ContentReader for LocalContentReader {
    fn read_local(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

impl<R: ContentReader + ?Sized> ContentReader for &R {
    fn read_local(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read_local(path)
    }
}
