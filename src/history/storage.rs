// SPDX-License-Identifier: MPL-2.0
//! Storage backends for the history document.
//!
//! The store itself only sees a raw document string; everything about where
//! and how it lives is behind [`HistoryStorage`], so tests substitute an
//! in-memory fake for the on-disk file.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the history document within the app data directory.
pub const HISTORY_FILE: &str = "icon_history.json";

/// Durable key-value storage for the serialized history sequence.
pub trait HistoryStorage {
    /// Reads the stored document, or `None` when nothing was saved yet.
    fn read(&self) -> Result<Option<String>>;

    /// Overwrites the stored document.
    fn write(&mut self, document: &str) -> Result<()>;
}

/// On-disk storage in the application data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage at an explicit file path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Storage at the conventional file name inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(HISTORY_FILE))
    }

    /// The path this storage reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStorage for FileStorage {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn write(&mut self, document: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, document)?;
        Ok(())
    }
}

/// Volatile storage used by tests and available as a null backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    document: Option<String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds the storage with a document, as if one had been saved.
    #[must_use]
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
        }
    }

    /// Returns the last written document, if any.
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl HistoryStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.document.clone())
    }

    fn write(&mut self, document: &str) -> Result<()> {
        self.document = Some(document.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_storage_reads_none_before_first_write() {
        let dir = tempdir().expect("create temp dir");
        let storage = FileStorage::in_dir(dir.path());
        assert!(storage.read().expect("read").is_none());
    }

    #[test]
    fn file_storage_round_trips_document() {
        let dir = tempdir().expect("create temp dir");
        let mut storage = FileStorage::in_dir(dir.path());

        storage.write("[1,2,3]").expect("write");
        assert_eq!(storage.read().expect("read").as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn file_storage_creates_parent_directories() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("nested").join(HISTORY_FILE);
        let mut storage = FileStorage::new(path.clone());

        storage.write("[]").expect("write");
        assert!(path.exists());
    }

    #[test]
    fn memory_storage_round_trips_document() {
        let mut storage = MemoryStorage::new();
        assert!(storage.read().expect("read").is_none());

        storage.write("{}").expect("write");
        assert_eq!(storage.read().expect("read").as_deref(), Some("{}"));
    }
}
