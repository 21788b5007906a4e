//! Merge rules for subtraction.

use crate::symbolic::expr::Expr;
use crate::symbolic::simplify::rules::add;
use polycalc_parser::op::BinOp;

/// Merges `y - x`.
///
/// - `a - a = 0` (shape equality)
/// - a negative subtrahend re-dispatches to addition: `y - (-x) = y + x`
/// - `a - 0 = a` and numeric folding
pub fn merge(x: Expr, y: Expr) -> Expr {
    if x.same_shape(&y) {
        return Expr::number(0);
    }
    if x.is_negative() {
        return add::merge(x.with_sign(false), y);
    }

    if let Some(xv) = x.as_number() {
        if xv == 0 {
            return y;
        }
        if let Some(yv) = y.as_number() {
            return Expr::number(yv.wrapping_sub(xv));
        }
    }

    Expr::binary(BinOp::Sub, y, x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn negative_subtrahend_becomes_addition() {
        // y - (-x) = y + x
        let merged = merge(Expr::variable('x').with_sign(true), Expr::variable('y'));
        assert_eq!(merged.to_string(), "y+x");
    }

    #[test]
    fn subtracting_zero() {
        let merged = merge(Expr::number(0), Expr::variable('x'));
        assert_eq!(merged.to_string(), "x");
    }

    #[test]
    fn numeric_folding() {
        let merged = merge(Expr::number(36), Expr::number(5));
        assert_eq!(merged, Expr::number(-31));
    }
}
