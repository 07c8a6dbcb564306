//! Debug utilities for inspecting diagram structure.
//!
//! [`Zdd::nodes`] flattens a diagram into the plain per-node records that
//! external consumers (renderers, tests) walk without touching the table.

use std::collections::HashSet;
use std::fmt;

use crate::node::Node;
use crate::reference::NodeId;
use crate::types::Var;
use crate::zdd::Zdd;

/// Detailed information about a single diagram node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo {
    pub id: NodeId,
    /// Variable at this node (None for terminals)
    pub var: Option<Var>,
    /// Branch of monomials containing `var`
    pub mul: Option<NodeId>,
    /// Branch of monomials without `var`
    pub add: Option<NodeId>,
    pub is_zero: bool,
    pub is_one: bool,
}

impl NodeInfo {
    fn new(id: NodeId, node: Node) -> Self {
        Self {
            id,
            var: node.var(),
            mul: node.mul(),
            add: node.add(),
            is_zero: node.is_zero(),
            is_one: node.is_one(),
        }
    }
}

impl fmt::Display for NodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one {
            write!(f, "ONE")
        } else if self.is_zero {
            write!(f, "ZERO")
        } else {
            write!(
                f,
                "{}(var={}, mul={}, add={})",
                self.id,
                self.var.map_or("?".to_string(), |v| v.to_string()),
                self.mul.map_or("?".to_string(), |r| r.to_string()),
                self.add.map_or("?".to_string(), |r| r.to_string()),
            )
        }
    }
}

impl Zdd {
    /// All nodes reachable from the root, terminals included, in depth-first
    /// pre-order (`mul` before `add`). Each node appears once.
    pub fn nodes(&self) -> Vec<NodeInfo> {
        let mut nodes = Vec::new();
        let mut visited = HashSet::new();
        let mut stack = vec![self.root()];

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            let info = NodeInfo::new(id, self.table().node(id));
            if let (Some(mul), Some(add)) = (info.mul, info.add) {
                stack.push(add);
                stack.push(mul);
            }
            nodes.push(info);
        }

        nodes
    }

    /// Multi-line listing of [`Zdd::nodes`].
    pub fn debug_string(&self) -> String {
        let nodes = self.nodes();
        let mut result = format!("ZDD {} (size={}):\n", self.root(), nodes.len());
        for node in &nodes {
            result.push_str("  ");
            result.push_str(&node.to_string());
            result.push('\n');
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use test_log::test;

    use super::*;
    use crate::ring::Ring;

    #[test]
    fn test_nodes_of_terminals() {
        let ring = Rc::new(Ring::with_size(2));
        let zero = Zdd::zero(&ring).nodes();
        assert_eq!(zero.len(), 1);
        assert!(zero[0].is_zero);
        assert_eq!(zero[0].var, None);

        let one = Zdd::one(&ring).nodes();
        assert_eq!(one.len(), 1);
        assert!(one[0].is_one);
    }

    #[test]
    fn test_nodes_pre_order() {
        let ring = Rc::new(Ring::with_size(3));
        let f = Zdd::from_monomials(&ring, [&ring.monomial([0, 1]), &ring.var(2)]);
        let nodes = f.nodes();

        // a, b, ONE, ZERO, c
        assert_eq!(nodes.len(), 5);
        assert_eq!(nodes[0].id, f.root());
        assert_eq!(nodes[0].var, Some(Var::new(0)));
        assert_eq!(nodes[1].var, Some(Var::new(1)));
        assert!(nodes[2].is_one);
        assert!(nodes[3].is_zero);
        assert_eq!(nodes[4].var, Some(Var::new(2)));
        assert_eq!(nodes[0].mul, Some(nodes[1].id));
        assert_eq!(nodes[0].add, Some(nodes[4].id));
    }

    #[test]
    fn test_debug_string() {
        let ring = Rc::new(Ring::with_size(2));
        let s = Zdd::from_var(&ring, 1).debug_string();
        assert!(s.contains("var=x1"), "Expected var=x1 in: {}", s);
        assert!(s.contains("ONE"));
        assert!(s.contains("ZERO"));
    }
}
