//! The capability contract for caller-defined structured reads

use crate::core::node::Node;
use crate::error::Result;

/// A type that can populate its own fields from a resolved node.
///
/// This is the one run-time polymorphism seam in the crate: the extractor
/// hands the resolved node to `populate` without knowing the target's shape.
/// Implementations pull their fields off the node with [`Node::read`] or
/// [`Node::decode`]; they do not re-enter path resolution.
///
/// ```
/// use yamlpick::{Node, Readable, Result};
///
/// #[derive(Default)]
/// struct Point2d {
///     x: f64,
///     y: f64,
/// }
///
/// impl Readable for Point2d {
///     fn populate(&mut self, node: &Node<'_>) -> Result<()> {
///         self.x = node.read("x")?;
///         self.y = node.read("y")?;
///         Ok(())
///     }
/// }
/// ```
pub trait Readable {
    /// Populate self from the given node
    fn populate(&mut self, node: &Node<'_>) -> Result<()>;
}
