//! Merge rules for division, including cancellation of shared factors.

use crate::symbolic::expr::Expr;
use crate::symbolic::simplify::rules::{mul, pow, sub};
use polycalc_parser::op::BinOp;

/// Merges `y / x`.
///
/// - `a / a = 1` (shape equality)
/// - `0 / a = 0`; a zero divisor is never folded, the quotient stays unreduced
/// - `a / 1 = a` and numeric folding (truncating toward zero)
/// - a composite numerator cancels a factor shared with the denominator through [`try_cancel`]
pub fn merge(x: Expr, y: Expr) -> Expr {
    if x.same_shape(&y) {
        return Expr::number(1);
    }

    if let Some(xv) = x.as_number() {
        if let Some(yv) = y.as_number() {
            return if yv == 0 {
                Expr::number(0)
            } else if xv == 0 {
                // never fold a zero divisor; the quotient stays unreduced
                Expr::binary(BinOp::Div, y, x)
            } else {
                Expr::number(yv.wrapping_div(xv))
            };
        }
        return if xv == 1 { y } else { Expr::binary(BinOp::Div, y, x) };
    }

    if y.is_zero() {
        return Expr::number(0);
    }

    if matches!(x, Expr::Variable { .. })
        && !matches!(y, Expr::Number { .. } | Expr::Variable { .. })
    {
        return cancel(y, x);
    }

    Expr::binary(BinOp::Div, y, x)
}

/// Cancels a factor shared between the numerator `n` and the denominator `d`, falling back to
/// the generic quotient.
fn cancel(n: Expr, d: Expr) -> Expr {
    if let Some(reduced) = try_cancel(&n, &d) {
        return reduced;
    }
    Expr::binary(BinOp::Div, n, d)
}

/// Returns the reduced quotient, or `None` when the numerator shares no factor with the
/// denominator.
///
/// - `a*b / a = b` and `b*a / a = b`
/// - a power limb of a product lowers its exponent: `a^n*b / a = a^(n-1)*b`
/// - `(a/b) / c = a / (b*c)`
/// - `a^n / a = a^(n-1)`
fn try_cancel(n: &Expr, d: &Expr) -> Option<Expr> {
    match n {
        Expr::Binary { op: BinOp::Mul, lhs, rhs, .. } => {
            if lhs.same_shape(d) {
                return Some((**rhs).clone());
            }
            if rhs.same_shape(d) {
                return Some((**lhs).clone());
            }
            if let Some(lowered) = lower_power(lhs, d) {
                return Some(Expr::binary(BinOp::Mul, lowered, (**rhs).clone()));
            }
            if let Some(lowered) = lower_power(rhs, d) {
                return Some(Expr::binary(BinOp::Mul, (**lhs).clone(), lowered));
            }
            None
        },
        Expr::Binary { op: BinOp::Div, lhs, rhs, .. } => Some(Expr::binary(
            BinOp::Div,
            (**lhs).clone(),
            mul::merge((**rhs).clone(), d.clone()),
        )),
        Expr::Binary { op: BinOp::Exp, .. } => lower_power(n, d),
        _ => None,
    }
}

/// Lowers `a^n` to `a^(n-1)` when its base matches the cancelled factor.
fn lower_power(power: &Expr, factor: &Expr) -> Option<Expr> {
    if let Expr::Binary { op: BinOp::Exp, lhs, rhs, .. } = power {
        if lhs.same_shape(factor) {
            let lowered = sub::merge(Expr::number(1), (**rhs).clone());
            return Some(pow::merge(lowered, (**lhs).clone()));
        }
    }
    None
}
