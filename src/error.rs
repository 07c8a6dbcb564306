//! Error type for fallible ring and diagram operations.
//!
//! Only caller-facing contract checks live here. Faults internal to the
//! diagram engine (for example, interning a node whose `mul` child is the
//! Zero terminal) are assertions, not errors.

/// Errors reported by the `try_*` family of operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Operands are bound to rings with a different number of variables.
    #[error("ring size mismatch: {left} vs {right} variables")]
    RingMismatch { left: usize, right: usize },

    /// A variable index does not belong to the ring.
    #[error("variable index {var} is out of range for a ring of {size} variables")]
    VariableOutOfRange { var: usize, size: usize },

    /// The same name was given to two ring variables.
    #[error("duplicate variable name: {0:?}")]
    DuplicateVariable(String),

    /// A variable name is empty or clashes with the constants `0` and `1`.
    #[error("invalid variable name: {0:?}")]
    InvalidVariableName(String),

    /// A name does not denote any ring variable.
    #[error("unknown variable: {0:?}")]
    UnknownVariable(String),

    /// Text could not be read as a monomial.
    #[error("cannot parse monomial from {0:?}")]
    InvalidMonomial(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::RingMismatch { left: 4, right: 3 };
        assert_eq!(err.to_string(), "ring size mismatch: 4 vs 3 variables");

        let err = Error::VariableOutOfRange { var: 7, size: 4 };
        assert_eq!(
            err.to_string(),
            "variable index 7 is out of range for a ring of 4 variables"
        );
    }
}
