//! Merge rules for exponentiation.

use crate::eval::int_pow;
use crate::symbolic::expr::Expr;
use crate::symbolic::simplify::rules::mul;
use polycalc_parser::op::BinOp;

/// Merges `y ^ x`.
///
/// - `a^0 = 1` and `a^1 = a`
/// - `0^n = 0` (for symbolic `n`) and `1^n = 1`
/// - numeric folding with the evaluator's integer exponentiation
/// - `(a^b)^c = a^(b*c)`, the exponent product folded through the multiplication merge
pub fn merge(x: Expr, y: Expr) -> Expr {
    if let Some(xv) = x.as_number() {
        if xv == 0 {
            return Expr::number(1);
        }
        if xv == 1 {
            return y;
        }
        if let Some(yv) = y.as_number() {
            return match int_pow(yv, xv) {
                Some(value) => Expr::number(value),
                // zero raised to a negative power; the node stays unreduced
                None => Expr::binary(BinOp::Exp, y, x),
            };
        }
        return if matches!(y, Expr::Binary { op: BinOp::Exp, .. }) {
            compose(y, x)
        } else {
            Expr::binary(BinOp::Exp, y, x)
        };
    }

    if y.is_zero() {
        return Expr::number(0);
    }
    if y.is_one() {
        return Expr::number(1);
    }
    if matches!(y, Expr::Binary { op: BinOp::Exp, .. }) {
        compose(y, x)
    } else {
        Expr::binary(BinOp::Exp, y, x)
    }
}

/// `(a^b)^c = a^(b*c)`.
fn compose(power: Expr, exp: Expr) -> Expr {
    if let Expr::Binary { op: BinOp::Exp, lhs, rhs, .. } = power {
        let combined = mul::merge(exp, *rhs);
        Expr::binary(BinOp::Exp, *lhs, combined)
    } else {
        Expr::binary(BinOp::Exp, power, exp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numeric_folding_uses_integer_exponentiation() {
        assert_eq!(merge(Expr::number(3), Expr::number(2)), Expr::number(8));
        assert_eq!(merge(Expr::number(-2), Expr::number(2)), Expr::number(0));
    }

    #[test]
    fn symbolic_exponent_on_a_power_base_composes() {
        // (x^2)^n = x^(2*n)
        let base = Expr::binary(BinOp::Exp, Expr::variable('x'), Expr::number(2));
        let merged = merge(Expr::variable('n'), base);
        assert_eq!(merged.to_string(), "x^2*n");
    }

    #[test]
    fn zero_to_a_negative_power_stays_unreduced() {
        let merged = merge(Expr::number(-2), Expr::number(0));
        assert_eq!(merged.to_string(), "0^-2");
    }
}
