//! Error kinds reported while executing a postfix token sequence.

use ariadne::{Fmt, Label, Report, ReportKind};
use polycalc_error::{ErrorKind, EXPR};
use std::ops::Range;

/// An operator was reached with fewer than two pending operands.
#[derive(Debug, Clone, PartialEq)]
pub struct InsufficientOperands;

impl ErrorKind for InsufficientOperands {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        Report::build(ReportKind::Error, src_id, spans[0].start)
            .with_message("operator is missing operands")
            .with_labels(spans.iter().map(|span| {
                Label::new((src_id, span.clone()))
                    .with_message(format!("this operator needs {} to apply to", "two operands".fg(EXPR)))
                    .with_color(EXPR)
            }))
            .finish()
    }
}

/// The right-hand operand of a division evaluated to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionByZero;

impl ErrorKind for DivisionByZero {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let mut builder = Report::build(ReportKind::Error, src_id, spans[0].start)
            .with_message("cannot divide by zero")
            .with_labels(spans.iter().map(|span| {
                Label::new((src_id, span.clone()))
                    .with_message("this operation divides by zero")
                    .with_color(EXPR)
            }));
        builder.set_help("the divisor of this operation evaluated to zero");
        builder.finish()
    }
}

/// A variable appeared in an expression that must be all integers.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedVariable {
    /// The name of the variable that was found.
    pub name: char,
}

impl ErrorKind for UnexpectedVariable {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let mut builder = Report::build(ReportKind::Error, src_id, spans[0].start)
            .with_message(format!("`{}` is not a number", self.name))
            .with_labels(spans.iter().map(|span| {
                Label::new((src_id, span.clone()))
                    .with_message("this variable")
                    .with_color(EXPR)
            }));
        builder.set_help(format!(
            "numerical evaluation requires every operand to be an {}; use `simplify` for symbolic input",
            "integer".fg(EXPR),
        ));
        builder.finish()
    }
}
