use crate::value::HostValue;

/// A handle to a node in the host's element tree.
///
/// Handles are cheap to clone (an index, a reference, a refcount) and are
/// compared by node identity, never by content.
pub trait Element: Clone {
    /// The node's parent, or `None` at the top of the tree.
    fn parent_node(&self) -> Option<Self>;

    /// Reads the property `name` off the node. Unknown names are
    /// [`HostValue::Undefined`].
    fn property(&self, name: &str) -> HostValue<'_>;

    /// `true` if both handles refer to the same node.
    fn is_same_node(&self, other: &Self) -> bool;
}
