//! Boolean polynomials as zero-suppressed decision diagrams.
//!
//! A [`Zdd`] is an immutable polynomial value: a root handle into its own
//! canonical [`Table`], bound to a [`Ring`]. Each monomial of the polynomial is
//! a path from the root to the One terminal; taking the `mul` edge out of a
//! node puts its variable into the monomial, taking the `add` edge leaves it out.
//!
//! ```text
//! ab + c:        a
//!              ╱   ╲ (add)
//!        (mul)b     c
//!             │╲    │╲
//!             1 0   1 0
//! ```
//!
//! # Operations
//!
//! `+` is symmetric difference of monomial sets (characteristic 2), `*` is the
//! idempotent product. A result starts from a copy of the left operand's table,
//! the right operand is imported into it, and the recursion runs there. The
//! operands are never modified.
//!
//! ```
//! use std::rc::Rc;
//! use polyzdd::ring::Ring;
//! use polyzdd::zdd::Zdd;
//!
//! let ring = Rc::new(Ring::with_size(4));
//! let ab = Zdd::from_monomial(&ring.monomial([0, 1]));
//! let c = Zdd::from_var(&ring, 2);
//!
//! let f = &ab + &c;
//! assert_eq!(f.to_string(), "ab + c");
//!
//! let g = &f * &ring.var(1);
//! assert_eq!(g.to_string(), "ab + bc");
//! assert!((&g + &g).is_zero());
//! ```

use std::cell::OnceCell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

use log::debug;
use num_bigint::BigUint;

use crate::apply::Apply;
use crate::cache::OpType;
use crate::error::Result;
use crate::monomial::Monomial;
use crate::node::Node;
use crate::ops::Operand;
use crate::reference::NodeId;
use crate::ring::Ring;
use crate::table::Table;
use crate::types::Var;

/// A boolean polynomial stored as a ZDD.
///
/// Cloning performs the structural copy: the node table is duplicated, the
/// terminals stay the shared [`NodeId::ZERO`] / [`NodeId::ONE`] constants, and
/// a computed leading monomial is carried along.
#[derive(Clone)]
pub struct Zdd {
    ring: Rc<Ring>,
    table: Table,
    root: NodeId,
    lm: OnceCell<Monomial>,
}

// Construction.
impl Zdd {
    fn from_parts(ring: Rc<Ring>, table: Table, root: NodeId) -> Self {
        Self {
            ring,
            table,
            root,
            lm: OnceCell::new(),
        }
    }

    /// The zero polynomial (empty diagram).
    pub fn zero(ring: &Rc<Ring>) -> Self {
        Self::from_parts(Rc::clone(ring), Table::new(ring.size()), NodeId::ZERO)
    }

    /// The constant polynomial `1`.
    pub fn one(ring: &Rc<Ring>) -> Self {
        Self::from_parts(Rc::clone(ring), Table::new(ring.size()), NodeId::ONE)
    }

    /// The polynomial consisting of the single variable `var`.
    ///
    /// # Panics
    ///
    /// Panics if `var` is not a variable of `ring`.
    pub fn from_var(ring: &Rc<Ring>, var: usize) -> Self {
        match Self::try_from_var(ring, var) {
            Ok(zdd) => zdd,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_from_var(ring: &Rc<Ring>, var: usize) -> Result<Self> {
        ring.check_var(var)?;
        let mut table = Table::new(ring.size());
        let root = table.intern(Var::from(var), NodeId::ONE, NodeId::ZERO);
        Ok(Self::from_parts(Rc::clone(ring), table, root))
    }

    /// The polynomial whose only monomial is `m`.
    pub fn from_monomial(m: &Monomial) -> Self {
        let ring = m.ring();
        let mut table = Table::new(ring.size());
        let root = build_monomial(&mut table, m);
        debug!("from_monomial({}) -> {:?}", m, table);
        Self::from_parts(Rc::clone(ring), table, root)
    }

    /// The sum of the given monomials. A monomial listed twice cancels out.
    ///
    /// # Panics
    ///
    /// Panics if a monomial belongs to a ring of a different size.
    pub fn from_monomials<'a>(ring: &Rc<Ring>, monomials: impl IntoIterator<Item = &'a Monomial>) -> Self {
        match Self::try_from_monomials(ring, monomials) {
            Ok(zdd) => zdd,
            Err(e) => panic!("invalid argument: {}", e),
        }
    }

    pub fn try_from_monomials<'a>(
        ring: &Rc<Ring>,
        monomials: impl IntoIterator<Item = &'a Monomial>,
    ) -> Result<Self> {
        let mut table = Table::new(ring.size());
        let mut root = NodeId::ZERO;
        for m in monomials {
            ring.check_compatible(m.ring())?;
            let node = build_monomial(&mut table, m);
            root = Apply::new(&mut table).add(root, node);
        }
        Ok(Self::from_parts(Rc::clone(ring), table, root))
    }
}

/// Builds the single-path diagram of `m` inside `table`: the node of the
/// first variable, multiplied by the node of each following variable in turn.
fn build_monomial(table: &mut Table, m: &Monomial) -> NodeId {
    if m.is_zero() {
        return NodeId::ZERO;
    }
    let mut vars = m.vars().into_iter().map(Var::from);
    let Some(first) = vars.next() else {
        return NodeId::ONE;
    };
    let mut root = table.intern(first, NodeId::ONE, NodeId::ZERO);
    for var in vars {
        let node = table.intern(var, NodeId::ONE, NodeId::ZERO);
        root = Apply::new(table).mul(root, node);
    }
    root
}

impl From<&Monomial> for Zdd {
    fn from(m: &Monomial) -> Self {
        Zdd::from_monomial(m)
    }
}

impl From<Monomial> for Zdd {
    fn from(m: Monomial) -> Self {
        Zdd::from_monomial(&m)
    }
}

// Accessors.
impl Zdd {
    pub fn ring(&self) -> &Rc<Ring> {
        &self.ring
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn is_zero(&self) -> bool {
        self.root.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.root.is_one()
    }
}

// Ring operations.
impl Zdd {
    /// Sum of `self` and a diagram or monomial.
    pub fn try_add<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Zdd> {
        self.apply(other.into(), OpType::Add)
    }

    /// Product of `self` and a diagram or monomial.
    pub fn try_mul<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Zdd> {
        self.apply(other.into(), OpType::Mul)
    }

    /// Infallible form used by the operator impls.
    pub(crate) fn operate(&self, other: Operand<'_>, op: OpType) -> Zdd {
        match self.apply(other, op) {
            Ok(zdd) => zdd,
            Err(e) => panic!("invalid argument: {}", e),
        }
    }

    fn apply(&self, other: Operand<'_>, op: OpType) -> Result<Zdd> {
        self.ring.check_compatible(other.ring())?;

        let mut table = self.table.clone();
        let rhs = match other {
            Operand::Zdd(zdd) => table.import(&zdd.table, zdd.root),
            Operand::Monomial(m) => build_monomial(&mut table, m),
        };

        let mut apply = Apply::new(&mut table);
        let root = match op {
            OpType::Add => apply.add(self.root, rhs),
            OpType::Mul => apply.mul(self.root, rhs),
        };
        debug!(
            "{:?}({}, {}) -> {} (cache hits = {}, misses = {})",
            op,
            self.root,
            rhs,
            root,
            apply.cache().hits(),
            apply.cache().misses()
        );

        Ok(Zdd::from_parts(Rc::clone(&self.ring), table, root))
    }
}

// Queries.
impl Zdd {
    /// The monomial reached by following `mul` edges from the root.
    ///
    /// This is the greatest monomial in lexicographic order. Zero and One
    /// diagrams give the zero and one monomials. Computed once and cached.
    pub fn leading_monomial(&self) -> &Monomial {
        self.lm.get_or_init(|| {
            if self.root.is_zero() {
                return self.ring.zero();
            }
            let mut vars = Vec::new();
            let mut node = self.root;
            while !node.is_terminal() {
                let (var, mul, _) = self.table.internal(node);
                vars.push(var.index());
                node = mul;
            }
            self.ring.monomial(vars)
        })
    }

    /// Number of monomials in the polynomial (0 for the zero polynomial).
    pub fn count(&self) -> BigUint {
        let mut cache = HashMap::new();
        self.count_rec(self.root, &mut cache)
    }

    fn count_rec(&self, node: NodeId, cache: &mut HashMap<NodeId, BigUint>) -> BigUint {
        if node.is_zero() {
            return BigUint::default();
        }
        if node.is_one() {
            return BigUint::from(1u32);
        }
        if let Some(res) = cache.get(&node) {
            return res.clone();
        }
        let (_, mul, add) = self.table.internal(node);
        let res = self.count_rec(mul, cache) + self.count_rec(add, cache);
        cache.insert(node, res.clone());
        res
    }

    /// Returns true if `m` is one of the polynomial's monomials.
    pub fn contains(&self, m: &Monomial) -> bool {
        if m.is_zero() || m.ring().size() != self.ring.size() {
            return false;
        }
        let vars = m.vars();
        let mut k = 0;
        let mut node = self.root;
        loop {
            match self.table.node(node) {
                Node::Zero => return false,
                Node::One => return k == vars.len(),
                Node::Internal { var, mul, add } => match vars.get(k) {
                    Some(&want) if var.index() == want => {
                        node = mul;
                        k += 1;
                    }
                    Some(&want) if var.index() > want => return false,
                    _ => node = add,
                },
            }
        }
    }

    /// Highest degree among the monomials (0 for the zero polynomial).
    pub fn degree(&self) -> usize {
        let mut cache = HashMap::new();
        self.degree_rec(self.root, &mut cache).unwrap_or(0)
    }

    fn degree_rec(&self, node: NodeId, cache: &mut HashMap<NodeId, Option<usize>>) -> Option<usize> {
        if node.is_zero() {
            return None;
        }
        if node.is_one() {
            return Some(0);
        }
        if let Some(&res) = cache.get(&node) {
            return res;
        }
        let (_, mul, add) = self.table.internal(node);
        let with_var = self.degree_rec(mul, cache).map(|d| d + 1);
        let res = with_var.max(self.degree_rec(add, cache));
        cache.insert(node, res);
        res
    }

    /// Number of internal nodes reachable from the root.
    pub fn node_count(&self) -> usize {
        self.table.descendants(self.root).len()
    }

    /// Number of internal nodes held by the table, reachable or not.
    pub fn table_size(&self) -> usize {
        self.table.len()
    }

    /// Node-by-node comparison with a diagram that may live in another table.
    pub fn is_isomorphic(&self, other: &Zdd) -> bool {
        self.ring.size() == other.ring.size() && self.table.equivalent(self.root, &other.table, other.root)
    }

    /// Nested dump of the node structure, e.g. `@3:(a, @2:(b, ⊤, ⊥), ⊥)`.
    pub fn to_bracket_string(&self) -> String {
        let mut visited = HashSet::new();
        self.node_to_str(self.root, &mut visited)
    }

    fn node_to_str(&self, node: NodeId, visited: &mut HashSet<NodeId>) -> String {
        if node.is_terminal() {
            return node.to_string();
        }
        if !visited.insert(node) {
            return node.to_string();
        }
        let (var, mul, add) = self.table.internal(node);
        format!(
            "{}:({}, {}, {})",
            node,
            self.ring.name(var.index()),
            self.node_to_str(mul, visited),
            self.node_to_str(add, visited),
        )
    }
}

/// Polynomial equality: both diagrams enumerate the same monomials in the same order.
impl PartialEq for Zdd {
    fn eq(&self, other: &Self) -> bool {
        self.ring.size() == other.ring.size() && self.iter().eq(other.iter())
    }
}

impl Eq for Zdd {}

impl fmt::Display for Zdd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", m)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Zdd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Zdd")
            .field("poly", &format_args!("{}", self))
            .field("root", &self.root)
            .field("table", &self.table)
            .finish()
    }
}
