//! Square-free monomials over a boolean ring.
//!
//! A [`Monomial`] is an exponent vector in `{0,1}^n`, where `n` is the ring size.
//! Multiplication is idempotent (`a * a == a`), so a product is the union of the
//! variable sets and `lcm` coincides with `*`.
//!
//! `zero` and `one` both have an empty variable set; they are told apart by a
//! marker, not by their bits. `zero` absorbs multiplication, `one` is its identity.
//!
//! # Ordering
//!
//! Monomials are ordered lexicographically with variable 0 the most
//! significant, e.g. `ab > a > bc > b > c > 1 > 0`. At the lowest index where
//! two exponent vectors differ, the monomial holding that variable is the
//! greater one. Diagrams enumerate their monomials in descending order.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Div, Mul};
use std::rc::Rc;

use crate::bitset::BitSet;
use crate::error::Result;
use crate::ring::Ring;

/// A square-free monomial bound to a [`Ring`].
#[derive(Clone)]
pub struct Monomial {
    ring: Rc<Ring>,
    /// `None` is the zero monomial; `Some(∅)` is the one monomial.
    exponents: Option<BitSet>,
}

impl Monomial {
    pub(crate) fn from_parts(ring: Rc<Ring>, exponents: Option<BitSet>) -> Self {
        debug_assert!(exponents.as_ref().map_or(true, |e| e.width() == ring.size()));
        Self { ring, exponents }
    }

    pub fn ring(&self) -> &Rc<Ring> {
        &self.ring
    }

    pub fn is_zero(&self) -> bool {
        self.exponents.is_none()
    }

    pub fn is_one(&self) -> bool {
        self.exponents.as_ref().is_some_and(BitSet::is_empty)
    }

    /// Ascending indices of the variables in this monomial.
    pub fn vars(&self) -> Vec<usize> {
        self.exponents.as_ref().map_or_else(Vec::new, |e| e.iter().collect())
    }

    /// Number of variables. Both `zero` and `one` have degree 0.
    pub fn degree(&self) -> usize {
        self.exponents.as_ref().map_or(0, BitSet::len)
    }

    pub fn contains_var(&self, var: usize) -> bool {
        self.exponents.as_ref().is_some_and(|e| e.contains(var))
    }

    /// The 0/1 exponent vector, or `None` for `zero`.
    pub fn exponents(&self) -> Option<Vec<bool>> {
        let bits = self.exponents.as_ref()?;
        Some((0..bits.width()).map(|i| bits.contains(i)).collect())
    }

    fn check_same_ring(&self, other: &Monomial) -> Result<()> {
        self.ring.check_compatible(&other.ring)
    }

    fn with_exponents(&self, exponents: Option<BitSet>) -> Monomial {
        Monomial::from_parts(Rc::clone(&self.ring), exponents)
    }
}

// Algebra.
impl Monomial {
    /// Boolean-ring product: the union of both variable sets.
    pub fn try_multiply(&self, other: &Monomial) -> Result<Monomial> {
        self.check_same_ring(other)?;
        let exponents = match (&self.exponents, &other.exponents) {
            (Some(a), Some(b)) => Some(a.union(b)),
            _ => None,
        };
        Ok(self.with_exponents(exponents))
    }

    /// Divides `self` by `other`.
    ///
    /// Defined when every variable of `other` occurs in `self`; the result drops
    /// those variables. Otherwise, or when either side is `zero`, the result is `zero`.
    pub fn try_divide(&self, other: &Monomial) -> Result<Monomial> {
        self.check_same_ring(other)?;
        let exponents = match (&self.exponents, &other.exponents) {
            (Some(a), Some(b)) if b.is_subset(a) => Some(a.difference(b)),
            _ => None,
        };
        Ok(self.with_exponents(exponents))
    }

    /// Returns true if `other` divides `self`, i.e. `other.vars ⊆ self.vars`.
    pub fn try_is_divisible_by(&self, other: &Monomial) -> Result<bool> {
        self.check_same_ring(other)?;
        Ok(match (&self.exponents, &other.exponents) {
            (Some(a), Some(b)) => b.is_subset(a),
            _ => false,
        })
    }

    /// Returns true if the two monomials share no variable.
    pub fn try_is_relatively_prime(&self, other: &Monomial) -> Result<bool> {
        self.check_same_ring(other)?;
        Ok(match (&self.exponents, &other.exponents) {
            (Some(a), Some(b)) => a.is_disjoint(b),
            _ => true,
        })
    }

    /// Least common multiple; equal to the product in this ring.
    pub fn try_lcm(&self, other: &Monomial) -> Result<Monomial> {
        self.try_multiply(other)
    }

    /// Panicking form of [`Monomial::try_multiply`].
    pub fn multiply(&self, other: &Monomial) -> Monomial {
        unwrap_contract(self.try_multiply(other))
    }

    /// Panicking form of [`Monomial::try_divide`].
    pub fn divide(&self, other: &Monomial) -> Monomial {
        unwrap_contract(self.try_divide(other))
    }

    /// Panicking form of [`Monomial::try_is_divisible_by`].
    pub fn is_divisible_by(&self, other: &Monomial) -> bool {
        unwrap_contract(self.try_is_divisible_by(other))
    }

    /// Panicking form of [`Monomial::try_is_relatively_prime`].
    pub fn is_relatively_prime(&self, other: &Monomial) -> bool {
        unwrap_contract(self.try_is_relatively_prime(other))
    }

    /// Panicking form of [`Monomial::try_lcm`].
    pub fn lcm(&self, other: &Monomial) -> Monomial {
        unwrap_contract(self.try_lcm(other))
    }
}

fn unwrap_contract<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("invalid argument: {}", e),
    }
}

impl PartialEq for Monomial {
    fn eq(&self, other: &Self) -> bool {
        self.ring.size() == other.ring.size() && self.exponents == other.exponents
    }
}

impl Eq for Monomial {}

impl Hash for Monomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ring.size().hash(state);
        self.exponents.hash(state);
    }
}

impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ring.size().cmp(&other.ring.size()).then_with(|| {
            match (&self.exponents, &other.exponents) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(a), Some(b)) => a.lex_cmp(b),
            }
        })
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.exponents {
            None => write!(f, "0"),
            Some(bits) if bits.is_empty() => write!(f, "1"),
            Some(bits) => {
                for var in bits.iter() {
                    write!(f, "{}", self.ring.name(var))?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Debug for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Monomial({})", self)
    }
}

impl Mul<&Monomial> for &Monomial {
    type Output = Monomial;

    fn mul(self, rhs: &Monomial) -> Monomial {
        self.multiply(rhs)
    }
}

impl Mul for Monomial {
    type Output = Monomial;

    fn mul(self, rhs: Monomial) -> Monomial {
        self.multiply(&rhs)
    }
}

impl Div<&Monomial> for &Monomial {
    type Output = Monomial;

    fn div(self, rhs: &Monomial) -> Monomial {
        self.divide(rhs)
    }
}

impl Div for Monomial {
    type Output = Monomial;

    fn div(self, rhs: Monomial) -> Monomial {
        self.divide(&rhs)
    }
}
