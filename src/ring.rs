//! Boolean ring configuration.
//!
//! A [`Ring`] fixes the number of boolean variables and their names. It is
//! immutable once built and shared through `Rc`, so every [`Monomial`] and
//! [`Zdd`][crate::zdd::Zdd] carries a handle to the ring it is bound to.
//!
//! ```
//! use std::rc::Rc;
//! use polyzdd::ring::Ring;
//!
//! let ring = Rc::new(Ring::with_size(4));
//! let ab = ring.monomial([0, 1]);
//! assert_eq!(ab.to_string(), "ab");
//! assert_eq!(ring.parse_monomial("ab").unwrap(), ab);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::bitset::BitSet;
use crate::error::{Error, Result};
use crate::monomial::Monomial;

/// Variable count and names of a boolean ring.
#[derive(Clone, PartialEq, Eq)]
pub struct Ring {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl Ring {
    /// Creates a ring whose variable `i` is named `names[i]`.
    ///
    /// Names must be non-empty, pairwise distinct, must not contain `*`, `+`
    /// or whitespace, and must not be `0` or `1`.
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Result<Self> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if name.is_empty()
                || name == "0"
                || name == "1"
                || name.contains(|c: char| c == '*' || c == '+' || c.is_whitespace())
            {
                return Err(Error::InvalidVariableName(name.clone()));
            }
            if index.insert(name.clone(), i).is_some() {
                return Err(Error::DuplicateVariable(name.clone()));
            }
        }
        Ok(Self { names, index })
    }

    /// Creates a ring of `size` variables named `a`, `b`, …, `z`, then `x26`, `x27`, ….
    pub fn with_size(size: usize) -> Self {
        let names = (0..size).map(default_name).collect::<Vec<_>>();
        let index = names.iter().cloned().zip(0..).collect();
        Self { names, index }
    }

    /// Number of variables.
    pub fn size(&self) -> usize {
        self.names.len()
    }

    /// Name of variable `var`.
    ///
    /// # Panics
    ///
    /// Panics if `var` is out of range.
    pub fn name(&self, var: usize) -> &str {
        &self.names[var]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Index of the variable called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Checks that `var` is a variable of this ring.
    pub fn check_var(&self, var: usize) -> Result<()> {
        if var < self.size() {
            Ok(())
        } else {
            Err(Error::VariableOutOfRange { var, size: self.size() })
        }
    }

    /// Checks that `other` has the same number of variables.
    pub fn check_compatible(&self, other: &Ring) -> Result<()> {
        if self.size() == other.size() {
            Ok(())
        } else {
            Err(Error::RingMismatch {
                left: self.size(),
                right: other.size(),
            })
        }
    }
}

fn default_name(i: usize) -> String {
    if i < 26 {
        char::from(b'a' + i as u8).to_string()
    } else {
        format!("x{}", i)
    }
}

impl fmt::Debug for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ring").field("names", &self.names).finish()
    }
}

// Monomial constructors bound to a shared ring.
impl Ring {
    /// The zero monomial (additive identity).
    pub fn zero(self: &Rc<Self>) -> Monomial {
        Monomial::from_parts(Rc::clone(self), None)
    }

    /// The one monomial (multiplicative identity, empty variable set).
    pub fn one(self: &Rc<Self>) -> Monomial {
        Monomial::from_parts(Rc::clone(self), Some(BitSet::new(self.size())))
    }

    /// The monomial consisting of the single variable `var`.
    ///
    /// # Panics
    ///
    /// Panics if `var` is out of range.
    pub fn var(self: &Rc<Self>, var: usize) -> Monomial {
        self.monomial([var])
    }

    /// The product of the given variables. An empty list gives `one`.
    ///
    /// # Panics
    ///
    /// Panics if any variable is out of range.
    pub fn monomial(self: &Rc<Self>, vars: impl IntoIterator<Item = usize>) -> Monomial {
        match self.try_monomial(vars) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible form of [`Ring::monomial`].
    pub fn try_monomial(self: &Rc<Self>, vars: impl IntoIterator<Item = usize>) -> Result<Monomial> {
        let mut bits = BitSet::new(self.size());
        for var in vars {
            self.check_var(var)?;
            bits.insert(var);
        }
        Ok(Monomial::from_parts(Rc::clone(self), Some(bits)))
    }

    /// Builds a monomial from an explicit 0/1 exponent vector of length `size`.
    /// The all-zero vector gives `one`.
    pub fn monomial_from_exponents(self: &Rc<Self>, exponents: &[bool]) -> Result<Monomial> {
        if exponents.len() != self.size() {
            return Err(Error::RingMismatch {
                left: self.size(),
                right: exponents.len(),
            });
        }
        self.try_monomial(exponents.iter().enumerate().filter(|(_, &e)| e).map(|(i, _)| i))
    }

    /// Parses `0`, `1`, or a product of variable names.
    ///
    /// Factors may be separated by `*`. Without separators the text is split
    /// greedily into the longest known variable names.
    pub fn parse_monomial(self: &Rc<Self>, text: &str) -> Result<Monomial> {
        let text = text.trim();
        match text {
            "" => return Err(Error::InvalidMonomial(text.to_string())),
            "0" => return Ok(self.zero()),
            "1" => return Ok(self.one()),
            _ => {}
        }

        let mut vars = Vec::new();
        for factor in text.split('*').map(str::trim) {
            if factor.is_empty() {
                return Err(Error::InvalidMonomial(text.to_string()));
            }
            if factor == "1" {
                continue;
            }
            if let Some(var) = self.index_of(factor) {
                vars.push(var);
                continue;
            }
            let mut rest = factor;
            while !rest.is_empty() {
                let (var, len) = (1..=rest.len())
                    .rev()
                    .filter(|&len| rest.is_char_boundary(len))
                    .find_map(|len| self.index_of(&rest[..len]).map(|var| (var, len)))
                    .ok_or_else(|| Error::UnknownVariable(rest.to_string()))?;
                vars.push(var);
                rest = &rest[len..];
            }
        }
        self.try_monomial(vars)
    }
}
