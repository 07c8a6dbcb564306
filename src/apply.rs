//! Recursive apply algorithms for the two ring operations.
//!
//! Both operands of every call are handles into the same canonical table, so
//! the `i == j` tests below are exact polynomial equality.
//!
//! Addition is symmetric difference of monomial sets:
//!
//! ```text
//! (x·P + Q) + (x·R + S) = x·(P + R) + (Q + S)
//! ```
//!
//! Multiplication distributes over the "contains x" / "lacks x" split of each
//! operand and folds `x·x` back to `x`:
//!
//! ```text
//! (x·P + Q) · (x·R + S) = x·(Q·R + P·R + P·S) + Q·S
//! ```
//!
//! Whenever the `x`-cofactor of a result is Zero the node is elided and the
//! result is the remaining cofactor alone.

use std::cmp::Ordering;

use log::trace;

use crate::cache::{Cache, CacheKey, OpType};
use crate::reference::NodeId;
use crate::table::Table;
use crate::types::Var;

/// A single top-level apply run over a table.
pub struct Apply<'a> {
    table: &'a mut Table,
    cache: Cache,
}

impl<'a> Apply<'a> {
    pub fn new(table: &'a mut Table) -> Self {
        Self {
            table,
            cache: Cache::new(),
        }
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Builds `var·mul + add`, eliding the node when `mul` is Zero.
    fn mk_node(&mut self, var: Var, mul: NodeId, add: NodeId) -> NodeId {
        if mul.is_zero() {
            return add;
        }
        self.table.intern(var, mul, add)
    }

    /// Boolean-ring sum of `i` and `j`.
    pub fn add(&mut self, i: NodeId, j: NodeId) -> NodeId {
        trace!("add({}, {})", i, j);

        if i.is_zero() {
            return j;
        }
        if j.is_zero() {
            return i;
        }
        if i == j {
            return NodeId::ZERO;
        }

        let key = CacheKey::commutative(OpType::Add, i, j);
        if let Some(res) = self.cache.get(&key) {
            trace!("cache: add({}, {}) -> {}", i, j, res);
            return res;
        }

        let res = if i.is_one() {
            // Toggle the empty monomial in j's add branch.
            let (var, mul, add) = self.table.internal(j);
            let add = self.add(add, NodeId::ONE);
            self.table.intern(var, mul, add)
        } else if j.is_one() {
            let (var, mul, add) = self.table.internal(i);
            let add = self.add(add, NodeId::ONE);
            self.table.intern(var, mul, add)
        } else {
            let (vi, mi, ai) = self.table.internal(i);
            let (vj, mj, aj) = self.table.internal(j);
            match vi.cmp(&vj) {
                Ordering::Less => {
                    let add = self.add(ai, j);
                    self.table.intern(vi, mi, add)
                }
                Ordering::Greater => {
                    let add = self.add(i, aj);
                    self.table.intern(vj, mj, add)
                }
                Ordering::Equal => {
                    let mul = self.add(mi, mj);
                    let add = self.add(ai, aj);
                    self.mk_node(vi, mul, add)
                }
            }
        };

        self.cache.insert(key, res);
        res
    }

    /// Boolean-ring product of `i` and `j`.
    pub fn mul(&mut self, i: NodeId, j: NodeId) -> NodeId {
        trace!("mul({}, {})", i, j);

        if i.is_one() {
            return j;
        }
        if i.is_zero() || j.is_zero() {
            return NodeId::ZERO;
        }
        if j.is_one() || i == j {
            return i;
        }

        let key = CacheKey::commutative(OpType::Mul, i, j);
        if let Some(res) = self.cache.get(&key) {
            trace!("cache: mul({}, {}) -> {}", i, j, res);
            return res;
        }

        let (vi, mi, ai) = self.table.internal(i);
        let (vj, mj, aj) = self.table.internal(j);
        let res = match vi.cmp(&vj) {
            Ordering::Less => {
                let mul = self.mul(mi, j);
                let add = self.mul(ai, j);
                self.mk_node(vi, mul, add)
            }
            Ordering::Greater => {
                let mul = self.mul(mj, i);
                let add = self.mul(aj, i);
                self.mk_node(vj, mul, add)
            }
            Ordering::Equal => {
                let m1 = self.mul(ai, mj);
                let m2 = self.mul(mi, mj);
                let m3 = self.mul(mi, aj);
                let m23 = self.add(m2, m3);
                let mul = self.add(m1, m23);
                let add = self.mul(ai, aj);
                self.mk_node(vi, mul, add)
            }
        };

        self.cache.insert(key, res);
        res
    }
}
