//! Lazy enumeration of the monomials of a diagram.
//!
//! [`Monomials`] walks the diagram depth-first, `mul` branch before `add`
//! branch, keeping the current path explicitly. Monomials come out in
//! descending lexicographic order, so the first one is the leading monomial:
//!
//! ```
//! use std::rc::Rc;
//! use polyzdd::ring::Ring;
//! use polyzdd::zdd::Zdd;
//!
//! let ring = Rc::new(Ring::with_size(3));
//! let f = Zdd::from_monomials(&ring, [&ring.one(), &ring.var(2), &ring.monomial([0, 1])]);
//! let terms: Vec<String> = f.iter().map(|m| m.to_string()).collect();
//! assert_eq!(terms, ["ab", "c", "1"]);
//! ```

use std::iter::FusedIterator;

use crate::monomial::Monomial;
use crate::reference::NodeId;
use crate::zdd::Zdd;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Running,
    Done,
}

/// Iterator over the monomials of a [`Zdd`].
///
/// The zero polynomial yields the zero monomial once.
#[derive(Debug, Clone)]
pub struct Monomials<'a> {
    zdd: &'a Zdd,
    /// Internal nodes on the current root-to-One path whose `mul` edge was taken.
    path: Vec<NodeId>,
    /// Variables of the nodes in `path`.
    vars: Vec<usize>,
    state: State,
}

impl<'a> Monomials<'a> {
    pub fn new(zdd: &'a Zdd) -> Self {
        Self {
            zdd,
            path: Vec::new(),
            vars: Vec::new(),
            state: State::Start,
        }
    }

    /// Follows `mul` edges from `node` down to the One terminal.
    fn descend(&mut self, mut node: NodeId) {
        let zdd = self.zdd;
        let table = zdd.table();
        while !node.is_one() {
            let (var, mul, _) = table.internal(node);
            self.path.push(node);
            self.vars.push(var.index());
            node = mul;
        }
    }

    fn current(&self) -> Monomial {
        self.zdd.ring().monomial(self.vars.iter().copied())
    }

    /// Produces the next monomial, or `None` once the path is exhausted.
    pub fn advance(&mut self) -> Option<Monomial> {
        match self.state {
            State::Done => None,
            State::Start => {
                let root = self.zdd.root();
                if root.is_zero() {
                    self.state = State::Done;
                    return Some(self.zdd.ring().zero());
                }
                if root.is_one() {
                    self.state = State::Done;
                    return Some(self.zdd.ring().one());
                }
                self.state = State::Running;
                self.descend(root);
                Some(self.current())
            }
            State::Running => {
                let zdd = self.zdd;
                let table = zdd.table();
                while let Some(&last) = self.path.last() {
                    if !table.add(last).is_zero() {
                        break;
                    }
                    self.path.pop();
                    self.vars.pop();
                }

                let Some(last) = self.path.pop() else {
                    self.state = State::Done;
                    return None;
                };
                self.vars.pop();
                self.descend(table.add(last));

                if self.vars.is_empty() {
                    // Only the all-`add` path is left: the constant term.
                    self.state = State::Done;
                    return Some(self.zdd.ring().one());
                }
                Some(self.current())
            }
        }
    }
}

impl Iterator for Monomials<'_> {
    type Item = Monomial;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}

impl FusedIterator for Monomials<'_> {}

impl Zdd {
    /// Iterates over the monomials, leading monomial first.
    pub fn iter(&self) -> Monomials<'_> {
        Monomials::new(self)
    }
}

impl<'a> IntoIterator for &'a Zdd {
    type Item = Monomial;
    type IntoIter = Monomials<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
