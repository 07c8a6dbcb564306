use std::fmt::{Display, Formatter};

/// A handle to a node in a canonical [`Table`][crate::table::Table].
///
/// Two handles from the same table are equal iff they denote the same
/// polynomial. Handles from different tables are not comparable; use
/// [`Table::equivalent`][crate::table::Table::equivalent] for that.
///
/// # Terminal Values
///
/// Every table stores the terminals at the same fixed slots, so the two
/// constants below are valid in all tables:
///
/// - `NodeId::ZERO`: the empty sum (polynomial `0`)
/// - `NodeId::ONE`: the sum holding only the empty monomial (polynomial `1`)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// The Zero terminal.
    pub const ZERO: NodeId = NodeId(0);

    /// The One terminal.
    pub const ONE: NodeId = NodeId(1);

    /// Creates a handle from a raw index.
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Returns the raw index value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the index for array access.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns true if this is a terminal (ZERO or ONE).
    pub const fn is_terminal(self) -> bool {
        self.0 <= 1
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_one(self) -> bool {
        self.0 == 1
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0 => write!(f, "⊥"),
            1 => write!(f, "⊤"),
            _ => write!(f, "@{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminals() {
        assert!(NodeId::ZERO.is_zero());
        assert!(NodeId::ZERO.is_terminal());
        assert!(!NodeId::ZERO.is_one());

        assert!(NodeId::ONE.is_one());
        assert!(NodeId::ONE.is_terminal());
        assert!(!NodeId::ONE.is_zero());
    }

    #[test]
    fn test_non_terminal() {
        let id = NodeId::new(42);
        assert!(!id.is_terminal());
        assert_eq!(id.raw(), 42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn test_display() {
        assert_eq!(NodeId::ZERO.to_string(), "⊥");
        assert_eq!(NodeId::ONE.to_string(), "⊤");
        assert_eq!(NodeId::new(7).to_string(), "@7");
    }
}
