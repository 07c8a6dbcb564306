//! # polyzdd: Boolean polynomials over ZDDs
//!
//! **`polyzdd`** represents polynomials over GF(2) with idempotent variables
//! (`x·x = x`) as **Zero-suppressed Decision Diagrams**. Such polynomials are
//! sums of square-free monomials, and a ZDD stores a family of sets compactly,
//! so each monomial is a set of variables and each polynomial is a set of monomials.
//!
//! ## Key Features
//!
//! - **Explicit ring**: a [`Ring`][crate::ring::Ring] fixes the variable count and names. Every value is bound to one.
//! - **Canonical tables**: every diagram owns a hash-consed [`Table`][crate::table::Table], so equal sub-diagrams share one node.
//! - **Value semantics**: `+` and `*` never modify their operands. A result starts from a copy of the left operand's table.
//! - **Lazy enumeration**: monomials come out of [`Zdd::iter`][crate::zdd::Zdd::iter] one at a time, leading monomial first.
//!
//! ## Basic Usage
//!
//! ```rust
//! use std::rc::Rc;
//! use polyzdd::ring::Ring;
//! use polyzdd::zdd::Zdd;
//!
//! // 1. Fix the ring: variables a, b, c, d
//! let ring = Rc::new(Ring::with_size(4));
//!
//! // 2. Build f = ab + c
//! let f = Zdd::from_monomial(&ring.monomial([0, 1])) + Zdd::from_var(&ring, 2);
//! assert_eq!(f.iter().collect::<Vec<_>>(), vec![ring.monomial([0, 1]), ring.var(2)]);
//!
//! // 3. Multiply by a monomial: (ab + c)·b = ab + bc
//! let g = &f * &ring.var(1);
//! assert_eq!(g.to_string(), "ab + bc");
//!
//! // 4. Characteristic 2: every polynomial is its own negation
//! assert!((&g + &g).is_zero());
//! ```
//!
//! ## Core Components
//!
//! - **[`monomial`]**: square-free monomials with multiplication, division and divisibility tests.
//! - **[`zdd`]**: the [`Zdd`][crate::zdd::Zdd] polynomial type and its queries.
//! - **[`apply`]**: the recursive `add` / `mul` algorithms over a table.
//! - **[`dot`]**: Graphviz output for inspecting diagrams.

pub mod apply;
pub mod bitset;
pub mod cache;
pub mod debug;
pub mod dot;
pub mod error;
pub mod iter;
pub mod monomial;
pub mod node;
pub mod ops;
pub mod reference;
pub mod ring;
pub mod subtable;
pub mod table;
pub mod types;
pub mod zdd;
