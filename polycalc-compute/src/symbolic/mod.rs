//! Algebraic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions in this module are represented as a tree of [`expr::Expr`] nodes: integer leaves,
//! variable leaves, and one node per binary operator. Trees are immutable; every transformation
//! rebuilds the affected spine bottom-up and returns a new tree, so a single expression is never
//! shared or mutated in place.
//!
//! Each node also carries a sign annotation denoting "this subexpression, negated". The
//! annotation lets the simplification rules fold sign cancellation (`y + (-x) = y - x`) without a
//! dedicated unary-negation node, and the renderer folds it back into the `+`/`-` of an enclosing
//! term. See the [`expr`] module for details.
//!
//! # Simplification and differentiation
//!
//! [`simplify::simplify`] reduces an expression by walking its postfix token sequence with a
//! stack of trees, merging the operands of every operator through the algebraic identities in
//! [`simplify::rules`]. The result is simplified in the sense that each merge applied every
//! identity it knows; it is not guaranteed to be a unique normal form.
//!
//! [`derivative::differentiate`] differentiates an expression with respect to its free variable
//! by structural recursion over a simplified tree, then re-simplifies the rendered derivative.

pub mod derivative;
pub mod expr;
pub mod simplify;
