//! Label paths for addressing nested document values
//!
//! A label path is an ordered sequence of string keys, consumed strictly
//! left-to-right during resolution. An empty path addresses the document
//! root itself. There is no wildcard, index, or fuzzy matching: one label,
//! one mapping lookup.

use std::fmt;

/// An ordered sequence of labels identifying a node by successive descent
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LabelPath {
    labels: Vec<String>,
}

impl LabelPath {
    /// Create a new empty label path (addresses the document root)
    pub fn root() -> Self {
        Self { labels: Vec::new() }
    }

    /// Create a label path from a slice of label-like strings
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Self {
        Self {
            labels: labels.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    /// Get the labels of this path
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Get the number of labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the path is empty (addresses the root)
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Create a new path by appending a label
    pub fn child(&self, label: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.labels.push(label.into());
        next
    }
}

impl fmt::Display for LabelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            write!(f, "<root>")
        } else {
            write!(f, "{}", self.labels.join("."))
        }
    }
}

impl<S: AsRef<str>> From<&[S]> for LabelPath {
    fn from(labels: &[S]) -> Self {
        Self::new(labels)
    }
}
