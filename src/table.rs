//! Canonical node table.
//!
//! A [`Table`] owns a node arena plus one [`Subtable`] per variable. Every
//! internal node enters the arena through [`Table::intern`], which returns the
//! existing handle when an equal node is already present. Since children are
//! interned before their parents, two handles in one table denote the same
//! polynomial iff they are equal, which turns the `i == j` shortcuts of the
//! apply algorithms into integer comparisons.
//!
//! Slots 0 and 1 of every arena hold the terminals, so [`NodeId::ZERO`] and
//! [`NodeId::ONE`] are valid in all tables. Tables never evict nodes: they grow
//! monotonically for as long as a diagram lineage keeps copying them.

use std::collections::{HashMap, HashSet};
use std::fmt::{self, Debug};

use log::trace;

use crate::node::Node;
use crate::reference::NodeId;
use crate::subtable::Subtable;
use crate::types::Var;

#[derive(Clone)]
pub struct Table {
    /// Node arena. Index 0 = Zero terminal, index 1 = One terminal.
    nodes: Vec<Node>,
    /// Per-variable subtables, indexed by variable.
    subtables: Vec<Subtable>,
}

impl Table {
    /// Creates an empty table for a ring of `num_vars` variables.
    pub fn new(num_vars: usize) -> Self {
        Self::with_capacity(num_vars, 16)
    }

    /// Creates an empty table with room for `capacity` internal nodes.
    pub fn with_capacity(num_vars: usize, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 2);
        nodes.push(Node::Zero);
        nodes.push(Node::One);
        let subtables = (0..num_vars).map(|i| Subtable::new(Var::from(i))).collect();
        Self { nodes, subtables }
    }

    /// Number of interned internal nodes.
    pub fn len(&self) -> usize {
        self.nodes.len() - 2
    }

    /// Returns true if no internal node has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this table.
    pub fn node(&self, id: NodeId) -> Node {
        self.nodes[id.index()]
    }

    /// Returns `(var, mul, add)` of an internal node.
    ///
    /// # Panics
    ///
    /// Panics if `id` is a terminal.
    pub fn internal(&self, id: NodeId) -> (Var, NodeId, NodeId) {
        match self.node(id) {
            Node::Internal { var, mul, add } => (var, mul, add),
            terminal => panic!("expected an internal node, got {:?} at {}", terminal, id),
        }
    }

    pub fn var(&self, id: NodeId) -> Var {
        self.internal(id).0
    }

    pub fn mul(&self, id: NodeId) -> NodeId {
        self.internal(id).1
    }

    pub fn add(&self, id: NodeId) -> NodeId {
        self.internal(id).2
    }

    pub fn subtable(&self, var: Var) -> Option<&Subtable> {
        self.subtables.get(var.index())
    }

    /// Returns the canonical node `(var, mul, add)`, allocating it if needed.
    ///
    /// # Panics
    ///
    /// Panics if `mul` is the Zero terminal. Such a node must be elided by the
    /// caller (the diagram at that position is just `add`).
    pub fn intern(&mut self, var: Var, mul: NodeId, add: NodeId) -> NodeId {
        assert!(
            !mul.is_zero(),
            "cannot intern ({}, {}, {}): the mul branch of an internal node must not be Zero",
            var,
            mul,
            add
        );
        debug_assert!(self.is_below(var, mul) && self.is_below(var, add));

        while self.subtables.len() <= var.index() {
            let next = Var::from(self.subtables.len());
            self.subtables.push(Subtable::new(next));
        }

        if let Some(id) = self.subtables[var.index()].find(mul, add) {
            trace!("intern({}, {}, {}) -> {} (existing)", var, mul, add, id);
            return id;
        }

        let raw = u32::try_from(self.nodes.len()).unwrap_or_else(|_| panic!("node table overflow"));
        let id = NodeId::new(raw);
        self.nodes.push(Node::Internal { var, mul, add });
        self.subtables[var.index()].insert(mul, add, id);
        trace!("intern({}, {}, {}) -> {} (new)", var, mul, add, id);
        id
    }

    /// True if `child` is a terminal or labelled with a variable after `var`.
    fn is_below(&self, var: Var, child: NodeId) -> bool {
        child.is_terminal() || self.var(child) > var
    }

    /// Copies the sub-diagram rooted at `root` in `other` into this table and
    /// returns its handle here.
    pub fn import(&mut self, other: &Table, root: NodeId) -> NodeId {
        let mut mapping = HashMap::new();
        self.import_rec(other, root, &mut mapping)
    }

    fn import_rec(&mut self, other: &Table, id: NodeId, mapping: &mut HashMap<NodeId, NodeId>) -> NodeId {
        if id.is_terminal() {
            return id;
        }
        if let Some(&res) = mapping.get(&id) {
            return res;
        }
        let (var, mul, add) = other.internal(id);
        let mul = self.import_rec(other, mul, mapping);
        let add = self.import_rec(other, add, mapping);
        let res = self.intern(var, mul, add);
        mapping.insert(id, res);
        res
    }

    /// Structural comparison of `a` in this table with `b` in `other`.
    ///
    /// Within one table this is handle equality. Across tables it recurses
    /// into `mul` and `add`, visiting every pair of nodes at most once.
    pub fn equivalent(&self, a: NodeId, other: &Table, b: NodeId) -> bool {
        if std::ptr::eq(self, other) {
            return a == b;
        }
        let mut seen = HashSet::new();
        self.equivalent_rec(a, other, b, &mut seen)
    }

    fn equivalent_rec(&self, a: NodeId, other: &Table, b: NodeId, seen: &mut HashSet<(NodeId, NodeId)>) -> bool {
        match (self.node(a), other.node(b)) {
            (Node::Zero, Node::Zero) | (Node::One, Node::One) => true,
            (
                Node::Internal { var: v1, mul: m1, add: a1 },
                Node::Internal { var: v2, mul: m2, add: a2 },
            ) => {
                if v1 != v2 {
                    return false;
                }
                // A pair seen before was either confirmed equal or already ended the walk.
                if !seen.insert((a, b)) {
                    return true;
                }
                self.equivalent_rec(m1, other, m2, seen) && self.equivalent_rec(a1, other, a2, seen)
            }
            _ => false,
        }
    }

    /// All internal nodes reachable from `root`.
    pub fn descendants(&self, root: NodeId) -> HashSet<NodeId> {
        let mut visited = HashSet::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if id.is_terminal() || !visited.insert(id) {
                continue;
            }
            let (_, mul, add) = self.internal(id);
            stack.push(mul);
            stack.push(add);
        }
        visited
    }
}

impl Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("num_vars", &self.subtables.len())
            .field("size", &self.len())
            .finish()
    }
}
