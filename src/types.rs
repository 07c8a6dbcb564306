//! Type-safe wrapper for ring variables.
use std::fmt;

/// A variable index (0-indexed, position in the ring).
///
/// Indices are also the diagram order: a lower index sits closer to the root.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u32);

impl Var {
    /// Creates a variable with the given index.
    pub const fn new(index: u32) -> Self {
        Var(index)
    }

    /// Returns the raw index as a `u32`.
    pub const fn id(self) -> u32 {
        self.0
    }

    /// Returns the index as a `usize` for array access.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

impl From<Var> for usize {
    fn from(var: Var) -> Self {
        var.index()
    }
}

impl From<usize> for Var {
    fn from(index: usize) -> Self {
        let index = u32::try_from(index).unwrap_or_else(|_| panic!("variable index {} does not fit in u32", index));
        Var(index)
    }
}
