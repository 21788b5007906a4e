//! Algebraic simplification of expressions.
//!
//! [`simplify`] walks a postfix token sequence with the same stack discipline as the numerical
//! evaluator, except the stack holds [`Expr`] trees: literals push leaves, and each operator
//! dispatches to the merge function for that operator in [`rules`]. A merge function applies the
//! algebraic identities it knows for the concrete shapes of its two operands and otherwise
//! returns the generic binary node, so simplification never fails past the parse boundary; it
//! only may not fully reduce.
//!
//! When a numeric coefficient is combined with a symbolic factor, the rebuilt node puts the
//! number on the left, so `x+x` simplifies to `2*x`.

pub mod rules;

use crate::error::InsufficientOperands;
use crate::symbolic::expr::Expr;
use polycalc_error::Error;
use polycalc_parser::op::BinOp;
use polycalc_parser::rpn::{parse_postfix, RpnTokenKind};

/// Reduces an expression to a simplified tree.
pub fn simplify(input: &str) -> Result<Expr, Error> {
    let rpn = parse_postfix(input)?;
    let mut stack: Vec<Expr> = Vec::new();

    for token in rpn {
        match token.kind {
            RpnTokenKind::Number(value) => stack.push(Expr::number(value)),
            RpnTokenKind::Variable(name) => stack.push(Expr::variable(name)),
            RpnTokenKind::Op(op) => {
                let x = stack.pop()
                    .ok_or_else(|| Error::new(vec![token.span.clone()], InsufficientOperands))?;
                let y = stack.pop()
                    .ok_or_else(|| Error::new(vec![token.span.clone()], InsufficientOperands))?;
                stack.push(merge(op, x, y));
            },
        }
    }

    // extra leftover trees are not validated; the most recent result wins
    stack.pop().ok_or_else(|| Error::new(vec![0..input.len()], InsufficientOperands))
}

/// Dispatches to the merge function for `op`. `x` is the operand popped first (the right-hand
/// side of the original infix expression), `y` the second.
fn merge(op: BinOp, x: Expr, y: Expr) -> Expr {
    match op {
        BinOp::Add => rules::add::merge(x, y),
        BinOp::Sub => rules::sub::merge(x, y),
        BinOp::Mul => rules::mul::merge(x, y),
        BinOp::Div => rules::div::merge(x, y),
        BinOp::Exp => rules::pow::merge(x, y),
    }
}
