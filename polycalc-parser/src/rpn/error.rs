//! Error kinds reported while converting an expression to postfix order.

use ariadne::{Fmt, Label, Report, ReportKind};
use polycalc_error::{ErrorKind, EXPR};
use std::ops::Range;

/// A parenthesis without a matching counterpart.
#[derive(Debug, Clone, PartialEq)]
pub struct UnbalancedParentheses {
    /// Whether the lone parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis
    /// was a closing parenthesis `)`.
    pub opening: bool,
}

impl ErrorKind for UnbalancedParentheses {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let mut builder = Report::build(ReportKind::Error, src_id, spans[0].start)
            .with_message("unbalanced parentheses")
            .with_labels(spans.iter().map(|span| {
                Label::new((src_id, span.clone()))
                    .with_message("this parenthesis is not matched")
                    .with_color(EXPR)
            }));
        builder.set_help(if self.opening {
            "add a closing parenthesis `)` somewhere after this"
        } else {
            "add an opening parenthesis `(` somewhere before this"
        });
        builder.finish()
    }
}

/// An integer literal too large for the evaluator's integer type.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerTooLarge;

impl ErrorKind for IntegerTooLarge {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let mut builder = Report::build(ReportKind::Error, src_id, spans[0].start)
            .with_message("integer literal is too large")
            .with_labels(spans.iter().map(|span| {
                Label::new((src_id, span.clone()))
                    .with_message("this number")
                    .with_color(EXPR)
            }));
        builder.set_help(format!(
            "literals must fit within {}",
            "a signed 64-bit integer".fg(EXPR),
        ));
        builder.finish()
    }
}

/// The input contained no expression to convert.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyExpression;

impl ErrorKind for EmptyExpression {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        Report::build(ReportKind::Error, src_id, spans[0].start)
            .with_message("empty expression")
            .with_labels(spans.iter().map(|span| {
                Label::new((src_id, span.clone()))
                    .with_message(format!("I expected to see an {} here", "expression".fg(EXPR)))
                    .with_color(EXPR)
            }))
            .finish()
    }
}
