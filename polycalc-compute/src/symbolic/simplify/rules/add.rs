//! Merge rules for addition, including sign absorption and combining like terms.

use crate::symbolic::expr::Expr;
use crate::symbolic::simplify::rules::{mul, sub};
use polycalc_parser::op::BinOp;

/// Merges `y + x`.
///
/// Identities, in the order they are tried:
/// - `a + a = 2*a` (shape equality)
/// - a negative operand re-dispatches to subtraction: `y + (-x) = y - x`
/// - `0 + a = a` and numeric folding
/// - a number folds into the numeric limb of an added or subtracted pair:
///   `(n - a) + m = (n+m) - a`
/// - two products sharing a symbolic factor fold their coefficients:
///   `n*a + m*a = (n+m)*a`
pub fn merge(x: Expr, y: Expr) -> Expr {
    if x.same_shape(&y) {
        return mul::merge(x, Expr::number(2));
    }
    if x.is_negative() {
        return sub::merge(x.with_sign(false), y);
    }
    if y.is_negative() {
        return sub::merge(y.with_sign(false), x);
    }

    if let Some(xv) = x.as_number() {
        if xv == 0 {
            return y;
        }
        if let Some(yv) = y.as_number() {
            return Expr::number(yv.wrapping_add(xv));
        }
        if let Some(folded) = fold_numeric_limb(&y, xv) {
            return folded;
        }
        return Expr::binary(BinOp::Add, y, x);
    }

    if let Some(yv) = y.as_number() {
        if yv == 0 {
            return x;
        }
        if let Some(folded) = fold_numeric_limb(&x, yv) {
            return folded;
        }
        return Expr::binary(BinOp::Add, y, x);
    }

    fold_products(x, y)
}

/// Folds a number into the numeric limb of an added or subtracted pair:
/// `(n + a) + m = (n+m) + a`, `(n - a) + m = (n+m) - a`.
fn fold_numeric_limb(pair: &Expr, addend: i64) -> Option<Expr> {
    if let Expr::Binary { op: op @ (BinOp::Add | BinOp::Sub), lhs, rhs, .. } = pair {
        if let Some(n) = lhs.as_number() {
            return Some(Expr::binary(*op, Expr::number(n.wrapping_add(addend)), (**rhs).clone()));
        }
    }
    None
}

/// Folds the coefficients of two products sharing a symbolic factor: `n*a + m*a = (n+m)*a`.
/// Returns the generic addition node when the operands share nothing.
fn fold_products(x: Expr, y: Expr) -> Expr {
    if let (
        Expr::Binary { op: BinOp::Mul, lhs: y_lhs, rhs: y_rhs, .. },
        Expr::Binary { op: BinOp::Mul, lhs: x_lhs, rhs: x_rhs, .. },
    ) = (&y, &x)
    {
        if y_rhs.same_shape(x_rhs) {
            let coefficient = merge((**x_lhs).clone(), (**y_lhs).clone());
            return mul::merge((**y_rhs).clone(), coefficient);
        }
    }

    Expr::binary(BinOp::Add, y, x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn negative_operand_becomes_subtraction() {
        // y + (-x) = y - x
        let merged = merge(Expr::variable('x').with_sign(true), Expr::variable('y'));
        assert_eq!(merged.to_string(), "y-x");
    }

    #[test]
    fn negative_left_operand_flips_the_pair() {
        // (-y) + x = x - y
        let merged = merge(Expr::variable('x'), Expr::variable('y').with_sign(true));
        assert_eq!(merged.to_string(), "x-y");
    }

    #[test]
    fn shape_equality_ignores_signs() {
        // (-x) + x still doubles, since the annotation is not part of the shape
        let merged = merge(Expr::variable('x').with_sign(true), Expr::variable('x'));
        assert_eq!(merged.to_string(), "2*x");
    }
}
