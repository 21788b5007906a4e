//! Tokenization and infix-to-postfix conversion for single-variable arithmetic expressions.
//!
//! The [`tokenizer`] module splits a raw expression string into tokens, merging runs of digits
//! into single integer literals. The [`rpn`] module reorders those tokens into postfix (reverse
//! Polish) order with the shunting-yard algorithm, using the precedence and associativity table
//! defined in [`op`]. The resulting [`rpn::RpnToken`] sequence is what the evaluation and
//! simplification stages in `polycalc-compute` consume.
//!
//! # Features
//!
//! - `serde`: Derives [`serde`] traits for various types provided by this crate.

pub mod op;
pub mod rpn;
pub mod tokenizer;
