//! Numerical evaluation of integer expressions.
//!
//! [`evaluate`] walks a postfix token sequence with a value stack: numbers push, and each
//! operator pops its two operands and pushes the result. Arithmetic wraps on overflow, division
//! truncates toward zero, and exponentiation stays within integers: a negative exponent takes the
//! reciprocal of the positive power and truncates it toward zero, so `2^(1-3)` evaluates to `0`
//! while `(0-1)^(0-5)` evaluates to `-1`.

use crate::error::{DivisionByZero, InsufficientOperands, UnexpectedVariable};
use polycalc_error::Error;
use polycalc_parser::op::BinOp;
use polycalc_parser::rpn::{parse_postfix, RpnTokenKind};
use std::ops::Range;

/// Evaluates an integer expression.
pub fn evaluate(input: &str) -> Result<i64, Error> {
    let rpn = parse_postfix(input)?;
    let mut stack: Vec<i64> = Vec::new();

    for token in rpn {
        match token.kind {
            RpnTokenKind::Number(value) => stack.push(value),
            RpnTokenKind::Variable(name) => {
                return Err(Error::new(vec![token.span], UnexpectedVariable { name }));
            },
            RpnTokenKind::Op(op) => {
                let x = pop_operand(&mut stack, &token.span)?;
                let y = pop_operand(&mut stack, &token.span)?;
                stack.push(apply(op, y, x, &token.span)?);
            },
        }
    }

    // extra leftover values are not validated; the most recent result wins
    stack.pop().ok_or_else(|| Error::new(vec![0..input.len()], InsufficientOperands))
}

/// Pops the most recently pushed value off the stack.
fn pop_operand(stack: &mut Vec<i64>, span: &Range<usize>) -> Result<i64, Error> {
    stack.pop().ok_or_else(|| Error::new(vec![span.clone()], InsufficientOperands))
}

/// Applies `lhs op rhs` over integers.
fn apply(op: BinOp, lhs: i64, rhs: i64, span: &Range<usize>) -> Result<i64, Error> {
    match op {
        BinOp::Add => Ok(lhs.wrapping_add(rhs)),
        BinOp::Sub => Ok(lhs.wrapping_sub(rhs)),
        BinOp::Mul => Ok(lhs.wrapping_mul(rhs)),
        BinOp::Div => if rhs == 0 {
            Err(Error::new(vec![span.clone()], DivisionByZero))
        } else {
            Ok(lhs.wrapping_div(rhs))
        },
        BinOp::Exp => int_pow(lhs, rhs)
            .ok_or_else(|| Error::new(vec![span.clone()], DivisionByZero)),
    }
}

/// Integer exponentiation, shared by the evaluator and the simplifier's constant folding.
///
/// A negative exponent takes the reciprocal of the positive power and truncates it toward zero,
/// which is `0` unless the base is `0` (division by zero, `None`) or `±1`. Exponents beyond
/// `u32::MAX` could only drive the result further into the integer limits, so they saturate.
pub(crate) fn int_pow(base: i64, exp: i64) -> Option<i64> {
    if exp >= 0 {
        Some(base.saturating_pow(exp.min(u32::MAX as i64) as u32))
    } else {
        match base {
            0 => None,
            1 => Some(1),
            -1 => Some(if exp % 2 == 0 { 1 } else { -1 }),
            _ => Some(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parenthesized() {
        assert_eq!(evaluate("3+4*(2-1)").unwrap(), 7);
    }

    #[test]
    fn precedence_chain() {
        assert_eq!(evaluate("5-6*18/3+2").unwrap(), -29);
    }

    #[test]
    fn mixed_operators() {
        assert_eq!(evaluate("10*20-9/3+20").unwrap(), 217);
    }

    #[test]
    fn exponent_binds_first() {
        assert_eq!(evaluate("10^3*9-100").unwrap(), 8900);
    }

    #[test]
    fn exponent_right_associative() {
        assert_eq!(evaluate("2^3^2").unwrap(), 512);
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(evaluate("7/2").unwrap(), 3);
        assert_eq!(evaluate("(1-8)/2").unwrap(), -3);
    }

    #[test]
    fn negative_exponent_truncates_reciprocal() {
        assert_eq!(evaluate("2^(1-3)").unwrap(), 0);
        assert_eq!(evaluate("(0-1)^(0-5)").unwrap(), -1);
    }

    #[test]
    fn division_by_zero() {
        assert!(evaluate("1/0").is_err());
        assert!(evaluate("0^(0-1)").is_err());
    }

    #[test]
    fn missing_operands() {
        assert!(evaluate("1+").is_err());
        assert!(evaluate("*").is_err());
    }

    #[test]
    fn variables_rejected() {
        assert!(evaluate("x+1").is_err());
    }

    #[test]
    fn leftover_values_not_validated() {
        assert_eq!(evaluate("1 2").unwrap(), 2);
    }
}
