//! Nodes: borrowed locations inside an open document
//!
//! A [`Node`] points at a value somewhere in a [`Document`](crate::Document)
//! tree, or at nothing: an *empty* node, produced when a lookup along the
//! way failed. Lookups on an empty node stay empty, so a walk never has to
//! check for failure mid-path; emptiness is checked once, at extraction time.
//!
//! Nodes borrow from the document that produced them and cannot outlive it.

use crate::core::path::LabelPath;
use crate::error::{Result, YamlPickError};
use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::path::Path;

/// An addressable location within a Document, possibly empty
#[derive(Debug, Clone)]
pub struct Node<'doc> {
    value: Option<&'doc Value>,
    file: &'doc Path,
    // Trail of labels that produced this node, kept for error context.
    trail: LabelPath,
}

impl<'doc> Node<'doc> {
    pub(crate) fn new(value: Option<&'doc Value>, file: &'doc Path, trail: LabelPath) -> Self {
        Self { value, file, trail }
    }

    /// Check whether this node addresses nothing
    pub fn is_empty(&self) -> bool {
        matches!(self.value, None | Some(Value::Null))
    }

    /// Get the underlying YAML value, if any
    pub fn value(&self) -> Option<&'doc Value> {
        self.value
    }

    /// Get the label trail that produced this node
    pub fn trail(&self) -> &LabelPath {
        &self.trail
    }

    /// Look up an immediate child by label.
    ///
    /// Returns an empty node if this node is empty, is not a mapping, or has
    /// no field with that name. The child's trail extends this node's trail,
    /// so its errors name the label that failed.
    pub fn child(&self, label: &str) -> Node<'doc> {
        let value = self.value.and_then(|v| v.get(label));
        Node::new(value, self.file, self.trail.child(label))
    }

    /// Convert this node's value into `T` via the document engine.
    ///
    /// Fails with an invalid-path error if the node is empty, and with a
    /// conversion error if the value refuses the requested type. The root
    /// node (empty trail) is the one exception: a root that refuses the
    /// type is reported as invalid-path, since with zero labels there is no
    /// narrower path the caller could have meant.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        let value = match self.value {
            Some(v) if !matches!(v, Value::Null) => v,
            _ => return Err(YamlPickError::invalid_path(self.file, self.trail.to_string())),
        };
        serde_yaml::from_value(value.clone()).map_err(|e| {
            if self.trail.is_empty() {
                YamlPickError::invalid_path(self.file, self.trail.to_string())
            } else {
                YamlPickError::conversion(
                    self.file,
                    self.trail.to_string(),
                    std::any::type_name::<T>(),
                    e,
                )
            }
        })
    }

    /// Look up an immediate child and convert it in one step
    pub fn read<T: DeserializeOwned>(&self, label: &str) -> Result<T> {
        self.child(label).decode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn node_over<'a>(value: &'a Value, file: &'a Path) -> Node<'a> {
        Node::new(Some(value), file, LabelPath::root())
    }

    #[test]
    fn test_child_lookup_on_mapping() {
        let value: Value = serde_yaml::from_str("name: lens\nfocal: 2.8").unwrap();
        let node = node_over(&value, Path::new("test.yaml"));

        assert!(!node.child("name").is_empty());
        assert!(node.child("aperture").is_empty());
        assert_eq!(node.read::<String>("name").unwrap(), "lens");
        assert_eq!(node.read::<f64>("focal").unwrap(), 2.8);
    }

    #[test]
    fn test_child_of_scalar_is_empty() {
        let value: Value = serde_yaml::from_str("42").unwrap();
        let node = node_over(&value, Path::new("test.yaml"));

        let child = node.child("anything");
        assert!(child.is_empty());
        assert_eq!(child.trail().to_string(), "anything");
    }

    #[test]
    fn test_empty_node_stays_empty_through_lookups() {
        let value: Value = serde_yaml::from_str("a: 1").unwrap();
        let node = node_over(&value, Path::new("test.yaml"));

        let deep = node.child("missing").child("x").child("y");
        assert!(deep.is_empty());
        assert_eq!(deep.trail().to_string(), "missing.x.y");
    }

    #[test]
    fn test_decode_empty_node_is_invalid_path() {
        let value: Value = serde_yaml::from_str("a: 1").unwrap();
        let node = node_over(&value, Path::new("test.yaml"));

        let err = node.child("missing").decode::<i64>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPath);
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_decode_type_mismatch_is_conversion() {
        let value: Value = serde_yaml::from_str("a: not-a-number").unwrap();
        let node = node_over(&value, Path::new("test.yaml"));

        let err = node.read::<i64>("a").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conversion);
        assert!(err.to_string().contains("test.yaml"));
    }

    #[test]
    fn test_root_type_mismatch_is_invalid_path() {
        // A mapping root asked for a scalar: with no labels there is no
        // value the caller could have addressed, so this is a path failure,
        // not a conversion failure.
        let value: Value = serde_yaml::from_str("a: 1\nb: 2").unwrap();
        let node = node_over(&value, Path::new("test.yaml"));

        let err = node.decode::<i64>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPath);
    }

    #[test]
    fn test_null_value_counts_as_empty() {
        let value: Value = serde_yaml::from_str("a: null").unwrap();
        let node = node_over(&value, Path::new("test.yaml"));

        assert!(node.child("a").is_empty());
        let err = node.read::<String>("a").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPath);
    }
}
