//! Per-variable interning map.
//!
//! A canonical table keeps one subtable per ring variable:
//!
//! ```text
//! subtables[0] → nodes labelled with variable 0
//! subtables[1] → nodes labelled with variable 1
//! ...
//! ```
//!
//! Since every node in a subtable carries the same variable, the key is just
//! the `(mul, add)` pair of child handles. Children are themselves canonical,
//! so handle equality of the key is structural equality of the node.

use std::collections::HashMap;

use crate::reference::NodeId;
use crate::types::Var;

/// Interned nodes of a single variable.
#[derive(Debug, Clone)]
pub struct Subtable {
    /// The variable for all nodes in this subtable.
    pub variable: Var,

    /// Map from (mul, add) to the node handle.
    nodes: HashMap<(NodeId, NodeId), NodeId>,
}

impl Subtable {
    /// Create a new empty subtable for the given variable.
    pub fn new(variable: Var) -> Self {
        Self {
            variable,
            nodes: HashMap::new(),
        }
    }

    /// Look up a node by its children.
    pub fn find(&self, mul: NodeId, add: NodeId) -> Option<NodeId> {
        self.nodes.get(&(mul, add)).copied()
    }

    /// Record a freshly allocated node.
    pub fn insert(&mut self, mul: NodeId, add: NodeId, id: NodeId) {
        let previous = self.nodes.insert((mul, add), id);
        debug_assert!(previous.is_none(), "node ({}, {}, {}) interned twice", self.variable, mul, add);
    }

    /// Get the number of nodes in this subtable.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the subtable is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all node handles in this subtable.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.values().copied()
    }
}
