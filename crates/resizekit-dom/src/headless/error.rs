use std::fmt;

use super::NodeId;

/// Failures reported by the headless [`Document`](super::Document).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomError {
    /// Appending `child` under `parent` would make a node its own ancestor.
    HierarchyRequest { parent: NodeId, child: NodeId },
    /// The node is not rendered, so it has no computed style.
    NotRendered(NodeId),
    /// The node handle belongs to a different document.
    WrongDocument,
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::HierarchyRequest { parent, child } => {
                write!(
                    f,
                    "cannot append node {} under node {}: would create a cycle",
                    child.index, parent.index
                )
            }
            DomError::NotRendered(id) => {
                write!(f, "node {} is not rendered; no computed style", id.index)
            }
            DomError::WrongDocument => f.write_str("node belongs to a different document"),
        }
    }
}

impl std::error::Error for DomError {}
