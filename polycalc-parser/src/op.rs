//! The binary operators understood by the expression engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use crate::tokenizer::TokenKind;
use std::{cmp::Ordering, fmt};

/// The associativity of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// The binary operation is left-associative: `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The binary operation is right-associative: `a op b op c` is evaluated as `a op (b op c)`.
    Right,
}

/// The precedence of a binary operation, in order from lowest precedence (evaluated last) to
/// highest precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of exponentiation (`^`).
    Exp,
}

/// A binary operation that takes two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Exp,
}

impl BinOp {
    /// Returns the operator corresponding to the given token kind, if the token is an operator.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            TokenKind::Exp => Some(Self::Exp),
            _ => None,
        }
    }

    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Exp => Precedence::Exp,
        }
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(&self) -> Associativity {
        match self {
            Self::Exp => Associativity::Right,
            Self::Add | Self::Sub | Self::Mul | Self::Div => Associativity::Left,
        }
    }

    /// Returns true if this operator, sitting on top of the operator stack, must be popped to the
    /// output before `incoming` is pushed.
    ///
    /// Equal-precedence `^` chains do not pop, so repeated `^` binds right to left; the remaining
    /// operators pop on equal precedence and bind left to right.
    pub fn pops_before(&self, incoming: BinOp) -> bool {
        match self.precedence().cmp(&incoming.precedence()) {
            Ordering::Greater => true,
            Ordering::Equal => incoming.associativity() == Associativity::Left,
            Ordering::Less => false,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Exp => "^",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_only_pop_terms() {
        assert!(BinOp::Add.pops_before(BinOp::Sub));
        assert!(BinOp::Sub.pops_before(BinOp::Add));
        assert!(!BinOp::Add.pops_before(BinOp::Mul));
        assert!(!BinOp::Sub.pops_before(BinOp::Exp));
    }

    #[test]
    fn factors_pop_everything_but_exponents() {
        assert!(BinOp::Mul.pops_before(BinOp::Add));
        assert!(BinOp::Div.pops_before(BinOp::Mul));
        assert!(!BinOp::Mul.pops_before(BinOp::Exp));
    }

    #[test]
    fn exponents_bind_right_to_left() {
        assert!(BinOp::Exp.pops_before(BinOp::Mul));
        assert!(BinOp::Exp.pops_before(BinOp::Add));
        assert!(!BinOp::Exp.pops_before(BinOp::Exp));
    }
}
