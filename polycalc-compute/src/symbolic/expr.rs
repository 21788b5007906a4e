//! The expression tree produced by simplification and differentiation.
//!
//! [`Expr`] is an immutable tagged tree. "Modifying" a node means building a new one:
//! [`Expr::with_sign`] is the only copy-with-a-changed-field builder, and the simplification
//! rules construct fresh nodes for every rewrite.
//!
//! # The sign annotation
//!
//! Every node carries a `negative` flag denoting "this subexpression, negated". The flag exists
//! so the merge rules can recognize and fold sign cancellation (`y + (-x) = y - x`,
//! `x - (-y) = x + y`) without a dedicated unary-negation node kind. It is a rendering and
//! simplification annotation, not part of the node's arithmetic identity: [`Expr::same_shape`],
//! the comparison that drives rewrites like `x + x = 2*x`, deliberately ignores it on every
//! node. The [`Display`](std::fmt::Display) implementation folds the flag into the `+`/`-` of an
//! enclosing addition or subtraction rather than printing a sign of its own.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use polycalc_parser::op::BinOp;
use std::fmt;

/// A node in an expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The literal value.
        value: i64,

        /// Whether this node denotes the negation of its value.
        negative: bool,
    },

    /// A variable.
    Variable {
        /// The variable's name.
        name: char,

        /// Whether this node denotes the negation of its variable.
        negative: bool,
    },

    /// A binary operation applied to two subexpressions.
    Binary {
        /// The operation being performed.
        op: BinOp,

        /// The left-hand operand.
        lhs: Box<Expr>,

        /// The right-hand operand.
        rhs: Box<Expr>,

        /// Whether this node denotes the negation of its result.
        negative: bool,
    },
}

impl Expr {
    /// Creates a number literal.
    pub fn number(value: i64) -> Expr {
        Expr::Number { value, negative: false }
    }

    /// Creates a variable.
    pub fn variable(name: char) -> Expr {
        Expr::Variable { name, negative: false }
    }

    /// Creates a binary node applying `op` to the given operands.
    pub fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            negative: false,
        }
    }

    /// Returns a copy of this node with the sign annotation set to `negative`. Children are
    /// untouched.
    pub fn with_sign(self, negative: bool) -> Expr {
        match self {
            Expr::Number { value, .. } => Expr::Number { value, negative },
            Expr::Variable { name, .. } => Expr::Variable { name, negative },
            Expr::Binary { op, lhs, rhs, .. } => Expr::Binary { op, lhs, rhs, negative },
        }
    }

    /// Returns true if this node carries the sign annotation.
    pub fn is_negative(&self) -> bool {
        match self {
            Expr::Number { negative, .. }
            | Expr::Variable { negative, .. }
            | Expr::Binary { negative, .. } => *negative,
        }
    }

    /// Returns the value of a number literal, ignoring the sign annotation.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Expr::Number { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Returns true if this node is the number literal `0`.
    pub fn is_zero(&self) -> bool {
        self.as_number() == Some(0)
    }

    /// Returns true if this node is the number literal `1`.
    pub fn is_one(&self) -> bool {
        self.as_number() == Some(1)
    }

    /// Structural equality, ignoring the sign annotation on every node.
    ///
    /// This is the comparison the merge rules use to decide whether two operands are "the same
    /// expression" (`x + x = 2*x`, `x - x = 0`, `x / x = 1`): two nodes that differ only in
    /// their sign annotations are the same shape.
    pub fn same_shape(&self, other: &Expr) -> bool {
        match (self, other) {
            (Expr::Number { value: a, .. }, Expr::Number { value: b, .. }) => a == b,
            (Expr::Variable { name: a, .. }, Expr::Variable { name: b, .. }) => a == b,
            (
                Expr::Binary { op: a_op, lhs: a_lhs, rhs: a_rhs, .. },
                Expr::Binary { op: b_op, lhs: b_lhs, rhs: b_rhs, .. },
            ) => a_op == b_op && a_lhs.same_shape(b_lhs) && a_rhs.same_shape(b_rhs),
            _ => false,
        }
    }
}

/// Renders the tree as flat infix text.
///
/// A negative-annotated operand of an addition renders as subtraction, and a negative-annotated
/// right operand of a subtraction cancels into addition; the annotation itself never prints, so
/// the folded operand appears in its unsigned form. The annotation has no textual form on
/// multiplication, division, or exponentiation nodes.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number { value, .. } => write!(f, "{}", value),
            Expr::Variable { name, .. } => write!(f, "{}", name),
            Expr::Binary { op: BinOp::Add, lhs, rhs, .. } => {
                if lhs.is_negative() {
                    write!(f, "{}-{}", rhs, lhs)
                } else if rhs.is_negative() {
                    write!(f, "{}-{}", lhs, rhs)
                } else {
                    write!(f, "{}+{}", lhs, rhs)
                }
            },
            Expr::Binary { op: BinOp::Sub, lhs, rhs, .. } => {
                if rhs.is_negative() {
                    write!(f, "{}+{}", lhs, rhs)
                } else {
                    write!(f, "{}-{}", lhs, rhs)
                }
            },
            Expr::Binary { op, lhs, rhs, .. } => write!(f, "{}{}{}", lhs, op, rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn with_sign_replaces_only_the_annotation() {
        let expr = Expr::binary(BinOp::Mul, Expr::number(2), Expr::variable('x'));
        let negated = expr.clone().with_sign(true);

        assert!(negated.is_negative());
        assert_eq!(negated.with_sign(false), expr);
    }

    #[test]
    fn same_shape_ignores_the_annotation() {
        let plain = Expr::binary(BinOp::Div, Expr::number(1), Expr::variable('x'));
        let negated = plain.clone().with_sign(true);

        assert!(plain.same_shape(&negated));
        assert_ne!(plain, negated);
    }

    #[test]
    fn same_shape_compares_structure() {
        let a = Expr::binary(BinOp::Exp, Expr::variable('x'), Expr::number(2));
        let b = Expr::binary(BinOp::Exp, Expr::variable('x'), Expr::number(3));
        assert!(!a.same_shape(&b));
    }

    #[test]
    fn negative_addend_renders_as_subtraction() {
        let expr = Expr::binary(
            BinOp::Add,
            Expr::variable('x'),
            Expr::number(3).with_sign(true),
        );
        assert_eq!(expr.to_string(), "x-3");

        let flipped = Expr::binary(
            BinOp::Add,
            Expr::number(3).with_sign(true),
            Expr::variable('x'),
        );
        assert_eq!(flipped.to_string(), "x-3");
    }

    #[test]
    fn double_negative_renders_as_addition() {
        let expr = Expr::binary(
            BinOp::Sub,
            Expr::variable('x'),
            Expr::number(3).with_sign(true),
        );
        assert_eq!(expr.to_string(), "x+3");
    }

    #[test]
    fn products_render_unsigned() {
        let expr = Expr::binary(BinOp::Mul, Expr::number(2), Expr::variable('x')).with_sign(true);
        assert_eq!(expr.to_string(), "2*x");
    }
}
