//! Open document handles and label-path resolution
//!
//! A [`Document`] owns the parsed value tree of one YAML file for the
//! duration of a single read operation. It is opened at the start of the
//! operation and dropped when the operation returns; nothing in this crate
//! keeps a handle alive across calls.

use crate::core::node::Node;
use crate::core::path::LabelPath;
use crate::error::{Result, YamlPickError};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// An opened handle to a hierarchical YAML file
#[derive(Debug)]
pub struct Document {
    root: Value,
    path: PathBuf,
}

impl Document {
    /// Open and parse a YAML file.
    ///
    /// Fails if the file cannot be read or its content is not valid YAML;
    /// both count as open-time (I/O kind) failures.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => YamlPickError::file_not_found(path),
            std::io::ErrorKind::PermissionDenied => YamlPickError::permission_denied(path),
            _ => YamlPickError::Io(e),
        })?;
        let root = serde_yaml::from_str(&content)?;
        Ok(Self {
            root,
            path: path.to_path_buf(),
        })
    }

    /// Build a document from an already-parsed value tree
    pub fn from_value(root: Value, path: impl Into<PathBuf>) -> Self {
        Self {
            root,
            path: path.into(),
        }
    }

    /// Get the path this document was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the root node of the document
    pub fn root(&self) -> Node<'_> {
        Node::new(Some(&self.root), &self.path, LabelPath::root())
    }

    /// Walk a label path from the root, one mapping lookup per label.
    ///
    /// Labels are consumed strictly left-to-right with no backtracking. A
    /// failed lookup anywhere along the way yields an empty node; callers
    /// check emptiness once, after the whole walk, so a mid-path miss and a
    /// final-step miss surface identically. Zero labels return the root
    /// itself, treated as already resolved.
    pub fn resolve<S: AsRef<str>>(&self, labels: &[S]) -> Node<'_> {
        labels
            .iter()
            .fold(self.root(), |node, label| node.child(label.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn doc_from(content: &str) -> Document {
        let root: Value = serde_yaml::from_str(content).unwrap();
        Document::from_value(root, "test.yaml")
    }

    #[test]
    fn test_open_missing_file() {
        let err = Document::open("/nonexistent/config.yaml").unwrap_err();
        assert!(matches!(err, YamlPickError::FileNotFound { .. }));
    }

    #[test]
    fn test_open_malformed_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"a: [unclosed\nb: {broken").unwrap();
        file.flush().unwrap();

        let err = Document::open(file.path()).unwrap_err();
        assert!(matches!(err, YamlPickError::Yaml(_)));
    }

    #[test]
    fn test_resolve_single_label() {
        let doc = doc_from("Hello: foo");
        let node = doc.resolve(&["Hello"]);
        assert!(!node.is_empty());
        assert_eq!(node.decode::<String>().unwrap(), "foo");
    }

    #[test]
    fn test_resolve_nested_labels() {
        let doc = doc_from("A:\n  B:\n    C:\n      nest: bar");
        let node = doc.resolve(&["A", "B", "C", "nest"]);
        assert_eq!(node.decode::<String>().unwrap(), "bar");
    }

    #[test]
    fn test_resolve_exact_depth_only() {
        let doc = doc_from("A:\n  B:\n    C:\n      nest: bar");
        // No `nest` directly under B; the intervening C level must be named.
        assert!(doc.resolve(&["A", "B", "nest"]).is_empty());
        assert!(doc.resolve(&["A", "nest"]).is_empty());
    }

    #[test]
    fn test_resolve_zero_labels_is_root() {
        let doc = doc_from("a: 1");
        let node = doc.resolve::<&str>(&[]);
        assert!(!node.is_empty());
        assert!(node.trail().is_empty());
    }

    #[test]
    fn test_resolve_past_leaf_is_empty() {
        let doc = doc_from("a: 1");
        assert!(doc.resolve(&["a", "b"]).is_empty());
    }

    #[test]
    fn test_mid_path_miss_and_final_miss_report_identically() {
        let doc = doc_from("a:\n  b: 1");
        let mid = doc.resolve(&["x", "b"]).decode::<i64>().unwrap_err();
        let last = doc.resolve(&["a", "x"]).decode::<i64>().unwrap_err();
        assert_eq!(mid.kind(), last.kind());
    }
}
