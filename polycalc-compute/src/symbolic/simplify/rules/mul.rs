//! Merge rules for multiplication, including distribution over composite operands.

use crate::symbolic::expr::Expr;
use crate::symbolic::simplify::rules::{add, pow, sub};
use polycalc_parser::op::BinOp;

/// Merges `y * x`.
///
/// - `0` absorbs and `1` is the identity, from either side
/// - numeric folding
/// - `a * a = a^2` (shape equality)
/// - a composite operand distributes or folds through [`distribute`]
pub fn merge(x: Expr, y: Expr) -> Expr {
    if let Some(xv) = x.as_number() {
        if xv == 0 {
            return Expr::number(0);
        }
        if xv == 1 {
            return y;
        }
        if let Some(yv) = y.as_number() {
            return Expr::number(xv.wrapping_mul(yv));
        }
        return match y {
            Expr::Variable { .. } => Expr::binary(BinOp::Mul, y, x),
            _ => distribute(y, x),
        };
    }

    if let Some(yv) = y.as_number() {
        if yv == 0 {
            return Expr::number(0);
        }
        if yv == 1 {
            return x;
        }
        // x is symbolic; keep the number on the left
        return match x {
            Expr::Variable { .. } => Expr::binary(BinOp::Mul, y, x),
            _ => distribute(x, y),
        };
    }

    if let (Expr::Variable { .. }, Expr::Variable { .. }) = (&x, &y) {
        if x.same_shape(&y) {
            return Expr::binary(BinOp::Exp, y, Expr::number(2));
        }
        return Expr::binary(BinOp::Mul, y, x);
    }

    match (&x, &y) {
        (Expr::Variable { .. }, _) => distribute(y, x),
        _ => distribute(x, y),
    }
}

/// Distributes or folds the multiplier `m` into the composite operand `c`.
///
/// - `m * (a + b) = m*a + m*b`, and likewise over subtraction
/// - a numeric or matching-variable multiplier folds into a limb of a product or quotient
/// - `a * a^n = a^(n+1)`
fn distribute(c: Expr, m: Expr) -> Expr {
    match c {
        Expr::Binary { op: BinOp::Add, lhs, rhs, .. } => {
            add::merge(merge(*rhs, m.clone()), merge(*lhs, m))
        },
        Expr::Binary { op: BinOp::Sub, lhs, rhs, .. } => {
            sub::merge(merge(*rhs, m.clone()), merge(*lhs, m))
        },
        _ => {
            if let Some(folded) = try_fold(&c, &m) {
                return folded;
            }
            // an unmatched power base keeps the multiplier on the left
            if matches!(c, Expr::Binary { op: BinOp::Exp, .. }) {
                Expr::binary(BinOp::Mul, m, c)
            } else {
                Expr::binary(BinOp::Mul, c, m)
            }
        },
    }
}

/// Folds the multiplier into a matching limb of a product, quotient, or power. Returns `None`
/// when no limb matches.
fn try_fold(c: &Expr, m: &Expr) -> Option<Expr> {
    match c {
        Expr::Binary { op: BinOp::Mul, lhs, rhs, .. } => {
            if let Some(mv) = m.as_number() {
                if let Some(lv) = lhs.as_number() {
                    return Some(Expr::binary(
                        BinOp::Mul,
                        Expr::number(lv.wrapping_mul(mv)),
                        (**rhs).clone(),
                    ));
                }
                if let Some(rv) = rhs.as_number() {
                    return Some(Expr::binary(
                        BinOp::Mul,
                        (**lhs).clone(),
                        Expr::number(rv.wrapping_mul(mv)),
                    ));
                }
                return None;
            }

            if matches!(m, Expr::Variable { .. }) {
                if matches!(**lhs, Expr::Variable { .. }) && lhs.same_shape(m) {
                    let squared = Expr::binary(BinOp::Exp, (**lhs).clone(), Expr::number(2));
                    return Some(Expr::binary(BinOp::Mul, squared, (**rhs).clone()));
                }
                if matches!(**rhs, Expr::Variable { .. }) && rhs.same_shape(m) {
                    let squared = Expr::binary(BinOp::Exp, (**rhs).clone(), Expr::number(2));
                    return Some(Expr::binary(BinOp::Mul, (**lhs).clone(), squared));
                }
            }

            None
        },
        Expr::Binary { op: BinOp::Div, lhs, rhs, .. } => {
            if let Some(mv) = m.as_number() {
                if let Some(lv) = lhs.as_number() {
                    return Some(Expr::binary(
                        BinOp::Div,
                        Expr::number(lv.wrapping_mul(mv)),
                        (**rhs).clone(),
                    ));
                }
                if let Some(rv) = rhs.as_number() {
                    if rv != 0 {
                        return Some(Expr::binary(
                            BinOp::Mul,
                            Expr::number(mv.wrapping_div(rv)),
                            (**lhs).clone(),
                        ));
                    }
                }
                return None;
            }

            if matches!(m, Expr::Variable { .. }) {
                if matches!(**lhs, Expr::Variable { .. }) && m.same_shape(lhs) {
                    let squared = Expr::binary(BinOp::Exp, m.clone(), Expr::number(2));
                    return Some(Expr::binary(BinOp::Div, squared, (**rhs).clone()));
                }
                if matches!(**rhs, Expr::Variable { .. }) && m.same_shape(rhs) {
                    return Some((**lhs).clone());
                }
            }

            None
        },
        Expr::Binary { op: BinOp::Exp, lhs, rhs, .. } => {
            if lhs.same_shape(m) {
                if let Some(n) = rhs.as_number() {
                    return Some(pow::merge(Expr::number(n.wrapping_add(1)), (**lhs).clone()));
                }
            }
            None
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scalar_folds_through_a_product() {
        // 2 * (x*3): the numeric limb absorbs the multiplier
        let product = Expr::binary(BinOp::Mul, Expr::variable('x'), Expr::number(3));
        let merged = merge(Expr::number(2), product);
        assert_eq!(merged.to_string(), "x*6");
    }

    #[test]
    fn matching_variable_squares_a_quotient_limb() {
        // x * (x/y) = x^2/y
        let quotient = Expr::binary(BinOp::Div, Expr::variable('x'), Expr::variable('y'));
        let merged = merge(Expr::variable('x'), quotient);
        assert_eq!(merged.to_string(), "x^2/y");
    }

    #[test]
    fn denominator_cancels_the_multiplier() {
        // x * (y/x) = y
        let quotient = Expr::binary(BinOp::Div, Expr::variable('y'), Expr::variable('x'));
        let merged = merge(Expr::variable('x'), quotient);
        assert_eq!(merged.to_string(), "y");
    }

    #[test]
    fn exponent_wraps_to_identity() {
        // a * a^(-1) = a^0 = 1, since the bumped exponent re-enters the power merge
        let recip = Expr::binary(BinOp::Exp, Expr::variable('x'), Expr::number(-1));
        let merged = merge(recip, Expr::variable('x'));
        assert_eq!(merged.to_string(), "1");
    }
}
