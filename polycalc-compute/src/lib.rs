//! Tools for evaluating, simplifying, and differentiating single-variable arithmetic
//! expressions.
//!
//! The [`evaluate`] function reduces an all-integer expression to a single value. The
//! [`simplify`] and [`differentiate`] functions build an [`Expr`] tree instead, applying
//! algebraic identities at every step; the tree renders back to infix text through its
//! [`Display`](std::fmt::Display) implementation. All three consume the postfix token sequences
//! produced by `polycalc-parser`.
//!
//! # Features
//!
//! - `serde`: Derives [`serde`] traits for various types provided by this crate.

pub mod error;
pub mod eval;
pub mod symbolic;

pub use eval::evaluate;
pub use symbolic::derivative::differentiate;
pub use symbolic::expr::Expr;
pub use symbolic::simplify::simplify;
