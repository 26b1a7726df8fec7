//! yamlpick: typed read access to values nested in hierarchical YAML documents
//!
//! This library is a thin convenience layer over a YAML document tree. Given
//! an ordered sequence of labels, it walks the tree one mapping lookup per
//! label, lands on the addressed node, and either converts it directly into a
//! requested type or hands it to a caller-supplied [`Readable`] implementation
//! that populates a structured value. Parsing and value coercion are delegated
//! entirely to `serde_yaml`; this crate only locates nodes and reports what
//! went wrong when it can't.
//!
//! # Quick Start
//!
//! ## Reading scalars
//!
//! ```rust,no_run
//! use yamlpick::Result;
//!
//! fn main() -> Result<()> {
//!     // Hello: "foo"
//!     let hello: String = yamlpick::read("config.yaml", &["Hello"])?;
//!
//!     // A: {B: {C: {nest: "bar"}}}, one label per nesting level
//!     let nested: String = yamlpick::read("config.yaml", &["A", "B", "C", "nest"])?;
//!     Ok(())
//! }
//! ```
//!
//! ## Reading structured values
//!
//! ```rust,no_run
//! use yamlpick::{Node, Readable, Result};
//!
//! #[derive(Default)]
//! struct Camera {
//!     width: u32,
//!     height: u32,
//! }
//!
//! impl Readable for Camera {
//!     fn populate(&mut self, node: &Node<'_>) -> Result<()> {
//!         self.width = node.read("width")?;
//!         self.height = node.read("height")?;
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let mut camera = Camera::default();
//!     yamlpick::read_struct(&mut camera, "config.yaml", &["sensors", "camera"])?;
//!     Ok(())
//! }
//! ```
//!
//! ## Reading matrices
//!
//! ```rust,no_run
//! use yamlpick::{Matrix, Result};
//!
//! fn main() -> Result<()> {
//!     // cvMat: {rows: 2, cols: 3, dt: d, data: [1, 2, 3, 4, 5, 6]}
//!     let mat: Matrix = yamlpick::read("calib.yaml", &["cvMat"])?;
//!     assert_eq!(mat.at(1, 2), Some(6.0));
//!     Ok(())
//! }
//! ```
//!
//! # Error model
//!
//! Every read either fully succeeds or fails with one of three kinds,
//! exposed via [`YamlPickError::kind`]:
//!
//! - **Io**: the file could not be opened or parsed
//! - **InvalidPath**: the label sequence addresses nothing (a miss at any
//!   depth, reported once after the full walk), or a zero-label read found
//!   a root that is not directly convertible to the requested type
//! - **Conversion**: a value addressed by at least one label refused the
//!   requested type
//!
//! There is no default substitution, partial result, or retry. Each call
//! opens its own document handle and releases it on return.

// Public API exports
pub use error::{ErrorKind, Result, YamlPickError};

// Core types
pub use core::{Document, LabelPath, Matrix, Node, Readable};

// IO types
pub use io::{ReaderConfig, YamlReader};

// Internal modules
pub mod core;
pub mod error;
pub mod io;

use serde::de::DeserializeOwned;
use std::path::Path;

/// Read a typed value addressed by a label path, with default settings.
///
/// Zero labels address the document root itself.
pub fn read<T, P, S>(path: P, labels: &[S]) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
    S: AsRef<str>,
{
    io::reader::convenience::read(path, labels)
}

/// Populate a [`Readable`] target from the node addressed by a label path,
/// with default settings.
pub fn read_struct<R, P, S>(target: &mut R, path: P, labels: &[S]) -> Result<()>
where
    R: Readable + ?Sized,
    P: AsRef<Path>,
    S: AsRef<str>,
{
    io::reader::convenience::read_struct(target, path, labels)
}
