//! The reader layer: open, resolve, extract
//!
//! [`YamlReader`] ties the pieces together for one read operation: pre-open
//! checks, opening the document, walking the label path, and handing the
//! resolved node to either the document engine's conversion or a caller's
//! [`Readable`] implementation. Each call opens its own document handle and
//! drops it on return, success or failure.

use crate::core::{Document, Readable};
use crate::error::{Result, YamlPickError};
use log::{debug, trace};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Configuration for the YAML reader
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Maximum file size to read (in bytes)
    pub max_file_size: Option<u64>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_file_size: Some(10 * 1024 * 1024), // 10MB default limit
        }
    }
}

/// Typed YAML reader
#[derive(Debug, Clone, Default)]
pub struct YamlReader {
    config: ReaderConfig,
}

impl YamlReader {
    /// Create a new reader with default configuration
    pub fn new() -> Self {
        Self {
            config: ReaderConfig::default(),
        }
    }

    /// Create a new reader with custom configuration
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Get reader configuration
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read a typed value addressed by a label path.
    ///
    /// Opens the file, walks the labels left-to-right, and converts the
    /// resolved node into `T`. Fails with an I/O-kind error if the file
    /// cannot be opened, an invalid-path error if the labels address
    /// nothing, and a conversion error if the value refuses the type.
    pub fn read_value<T, P, S>(&self, path: P, labels: &[S]) -> Result<T>
    where
        T: DeserializeOwned,
        P: AsRef<Path>,
        S: AsRef<str>,
    {
        let path = path.as_ref();
        let doc = self.open(path)?;
        let node = doc.resolve(labels);
        trace!("resolved `{}` in {}", node.trail(), path.display());
        node.decode()
    }

    /// Populate a [`Readable`] target from the node addressed by a label path.
    ///
    /// Same open and resolve sequence as [`read_value`](Self::read_value);
    /// the resolved node is handed to the target's `populate`, which mutates
    /// the target in place. No partial result: the target should be treated
    /// as unspecified if an error is returned.
    pub fn read_struct<R, P, S>(&self, target: &mut R, path: P, labels: &[S]) -> Result<()>
    where
        R: Readable + ?Sized,
        P: AsRef<Path>,
        S: AsRef<str>,
    {
        let path = path.as_ref();
        let doc = self.open(path)?;
        let node = doc.resolve(labels);
        trace!("resolved `{}` in {}", node.trail(), path.display());
        if node.is_empty() {
            return Err(YamlPickError::invalid_path(
                doc.path(),
                node.trail().to_string(),
            ));
        }
        target.populate(&node)
    }

    fn open(&self, path: &Path) -> Result<Document> {
        if !path.exists() {
            return Err(YamlPickError::file_not_found(path));
        }
        if !path.is_file() {
            return Err(YamlPickError::not_a_file(path));
        }
        if let Some(limit) = self.config.max_file_size {
            let size = fs::metadata(path)?.len();
            if size > limit {
                return Err(YamlPickError::FileTooLarge {
                    path: path.to_path_buf(),
                    size,
                    limit,
                });
            }
        }
        let doc = Document::open(path)?;
        debug!("opened {}", path.display());
        Ok(doc)
    }
}

/// Convenience functions for common operations
pub mod convenience {
    use super::*;

    /// Read a typed value with default reader settings
    pub fn read<T, P, S>(path: P, labels: &[S]) -> Result<T>
    where
        T: DeserializeOwned,
        P: AsRef<Path>,
        S: AsRef<str>,
    {
        YamlReader::new().read_value(path, labels)
    }

    /// Populate a `Readable` target with default reader settings
    pub fn read_struct<R, P, S>(target: &mut R, path: P, labels: &[S]) -> Result<()>
    where
        R: Readable + ?Sized,
        P: AsRef<Path>,
        S: AsRef<str>,
    {
        YamlReader::new().read_struct(target, path, labels)
    }
}
