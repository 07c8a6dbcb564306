use crate::reference::NodeId;
use crate::types::Var;

/// A diagram node.
///
/// An internal node stands for the polynomial `var * mul + add`, where neither
/// child mentions `var` or any variable ordered before it.
///
/// # Invariant
///
/// **Zero-suppression rule**: an internal node's `mul` is NEVER `NodeId::ZERO`.
/// Such a node is elided and replaced by its `add` child.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Node {
    Zero,
    One,
    Internal {
        var: Var,
        /// Cofactor of the monomials containing `var` (with `var` removed).
        mul: NodeId,
        /// The monomials not containing `var`.
        add: NodeId,
    },
}

impl Node {
    pub fn is_zero(&self) -> bool {
        matches!(self, Node::Zero)
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Node::One)
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Node::Internal { .. })
    }

    pub fn var(&self) -> Option<Var> {
        match *self {
            Node::Internal { var, .. } => Some(var),
            _ => None,
        }
    }

    pub fn mul(&self) -> Option<NodeId> {
        match *self {
            Node::Internal { mul, .. } => Some(mul),
            _ => None,
        }
    }

    pub fn add(&self) -> Option<NodeId> {
        match *self {
            Node::Internal { add, .. } => Some(add),
            _ => None,
        }
    }
}
