//! Input boundary: files handed to the generator by a build host.
//!
//! Content is resolved lazily through [`AdditionalFile::content`]. The model
//! itself never touches the filesystem.

use std::path::{Path, PathBuf};

use crate::error::Error;

/// A candidate resource file supplied by the build.
pub trait AdditionalFile {
    fn path(&self) -> &str;

    /// The file text, or `None` when the file has no content.
    fn content(&self) -> Result<Option<String>, Error>;
}

/// A file whose text is already in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryFile {
    pub path: String,
    pub content: Option<String>,
}

impl InMemoryFile {
    pub fn new(path: impl Into<String>, content: Option<&str>) -> Self {
        Self {
            path: path.into(),
            content: content.map(str::to_string),
        }
    }
}

impl AdditionalFile for InMemoryFile {
    fn path(&self) -> &str {
        &self.path
    }

    fn content(&self) -> Result<Option<String>, Error> {
        Ok(self.content.clone())
    }
}

/// A file read from disk when its content is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskFile {
    path: PathBuf,
    display: String,
}

impl DiskFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let display = path.to_string_lossy().into_owned();
        Self { path, display }
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }
}

impl AdditionalFile for DiskFile {
    fn path(&self) -> &str {
        &self.display
    }

    fn content(&self) -> Result<Option<String>, Error> {
        let text = std::fs::read_to_string(&self.path)?;
        Ok(Some(text))
    }
}
