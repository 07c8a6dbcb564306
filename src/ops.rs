//! Operator overloads for [`Zdd`].
//!
//! The right-hand side of `+` and `*` is either another diagram or a monomial.
//! Both cases go through [`Operand`]; a monomial is lifted to its single-path
//! diagram inside the result's table before the apply recursion starts.
//!
//! Operands bound to rings of different sizes panic. Use
//! [`Zdd::try_add`] / [`Zdd::try_mul`] to get an error instead.

use std::ops::{Add, AddAssign, Mul, MulAssign};
use std::rc::Rc;

use crate::cache::OpType;
use crate::monomial::Monomial;
use crate::ring::Ring;
use crate::zdd::Zdd;

/// Right-hand operand of a diagram operation.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Zdd(&'a Zdd),
    Monomial(&'a Monomial),
}

impl Operand<'_> {
    pub fn ring(&self) -> &Rc<Ring> {
        match self {
            Operand::Zdd(zdd) => zdd.ring(),
            Operand::Monomial(m) => m.ring(),
        }
    }
}

impl<'a> From<&'a Zdd> for Operand<'a> {
    fn from(zdd: &'a Zdd) -> Self {
        Operand::Zdd(zdd)
    }
}

impl<'a> From<&'a Monomial> for Operand<'a> {
    fn from(m: &'a Monomial) -> Self {
        Operand::Monomial(m)
    }
}

macro_rules! impl_binary_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $kind:expr) => {
        impl_binary_op!(@rhs $Op, $op, $OpAssign, $op_assign, $kind, Zdd);
        impl_binary_op!(@rhs $Op, $op, $OpAssign, $op_assign, $kind, Monomial);
    };
    (@rhs $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $kind:expr, $Rhs:ty) => {
        impl $Op<&$Rhs> for &Zdd {
            type Output = Zdd;

            fn $op(self, rhs: &$Rhs) -> Zdd {
                self.operate(Operand::from(rhs), $kind)
            }
        }

        impl $Op<$Rhs> for &Zdd {
            type Output = Zdd;

            fn $op(self, rhs: $Rhs) -> Zdd {
                self.operate(Operand::from(&rhs), $kind)
            }
        }

        impl $Op<&$Rhs> for Zdd {
            type Output = Zdd;

            fn $op(self, rhs: &$Rhs) -> Zdd {
                self.operate(Operand::from(rhs), $kind)
            }
        }

        impl $Op<$Rhs> for Zdd {
            type Output = Zdd;

            fn $op(self, rhs: $Rhs) -> Zdd {
                self.operate(Operand::from(&rhs), $kind)
            }
        }

        impl $OpAssign<&$Rhs> for Zdd {
            fn $op_assign(&mut self, rhs: &$Rhs) {
                *self = self.operate(Operand::from(rhs), $kind);
            }
        }

        impl $OpAssign<$Rhs> for Zdd {
            fn $op_assign(&mut self, rhs: $Rhs) {
                *self = self.operate(Operand::from(&rhs), $kind);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, OpType::Add);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, OpType::Mul);
