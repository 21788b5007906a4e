//! Conversion of infix token sequences into postfix (reverse Polish) order.
//!
//! The converter maintains an operator stack and an output sequence. Numbers and variables are
//! appended to the output directly; an incoming operator first pops every stacked operator that
//! [must come off](crate::op::BinOp::pops_before) before it; parentheses group subexpressions and
//! never reach the output. [`to_postfix`] performs the conversion over tokens, and
//! [`parse_postfix`] is the string-to-postfix convenience used by the evaluation and
//! simplification entry points.

pub mod error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use crate::op::BinOp;
use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use error::{EmptyExpression, IntegerTooLarge, UnbalancedParentheses};
use polycalc_error::Error;
use std::ops::Range;

/// A token in postfix order.
#[derive(Debug, Clone, PartialEq)]
pub struct RpnToken {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: RpnTokenKind,
}

/// The kinds of tokens that can appear in a postfix sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RpnTokenKind {
    /// An integer literal.
    Number(i64),

    /// A variable name.
    Variable(char),

    /// A binary operator.
    Op(BinOp),
}

/// An entry on the operator stack.
#[derive(Debug)]
enum StackEntry {
    /// An opening parenthesis waiting for its match.
    OpenParen(Range<usize>),

    /// A binary operator waiting to be popped to the output.
    Op(Range<usize>, BinOp),
}

/// Pops operators with sufficient precedence to the output, then pushes `op`.
fn push_operator(
    stack: &mut Vec<StackEntry>,
    output: &mut Vec<RpnToken>,
    span: Range<usize>,
    op: BinOp,
) {
    while let Some(StackEntry::Op(top_span, top)) = stack.last() {
        if !top.pops_before(op) {
            break;
        }
        output.push(RpnToken {
            span: top_span.clone(),
            kind: RpnTokenKind::Op(*top),
        });
        stack.pop();
    }
    stack.push(StackEntry::Op(span, op));
}

/// Pops operators to the output until the matching opening parenthesis is found and discarded.
fn close_paren(
    stack: &mut Vec<StackEntry>,
    output: &mut Vec<RpnToken>,
    span: Range<usize>,
) -> Result<(), Error> {
    loop {
        match stack.pop() {
            Some(StackEntry::Op(op_span, op)) => output.push(RpnToken {
                span: op_span,
                kind: RpnTokenKind::Op(op),
            }),
            Some(StackEntry::OpenParen(_)) => return Ok(()),
            None => return Err(Error::new(vec![span], UnbalancedParentheses { opening: false })),
        }
    }
}

/// Converts a token sequence into postfix order. Whitespace tokens are skipped.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<RpnToken>, Error> {
    let mut stack = Vec::new();
    let mut output = Vec::new();

    for token in tokens {
        if token.is_whitespace() {
            continue;
        }

        match token.kind {
            TokenKind::Int => {
                let value = token.lexeme.parse::<i64>()
                    .map_err(|_| Error::new(vec![token.span.clone()], IntegerTooLarge))?;
                output.push(RpnToken {
                    span: token.span.clone(),
                    kind: RpnTokenKind::Number(value),
                });
            },
            TokenKind::OpenParen => stack.push(StackEntry::OpenParen(token.span.clone())),
            TokenKind::CloseParen => close_paren(&mut stack, &mut output, token.span.clone())?,
            _ => match BinOp::from_token(token.kind) {
                Some(op) => push_operator(&mut stack, &mut output, token.span.clone(), op),
                // a catch-all symbol, treated as a variable name
                None => if let Some(name) = token.lexeme.chars().next() {
                    output.push(RpnToken {
                        span: token.span.clone(),
                        kind: RpnTokenKind::Variable(name),
                    });
                },
            },
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Op(span, op) => output.push(RpnToken {
                span,
                kind: RpnTokenKind::Op(op),
            }),
            StackEntry::OpenParen(span) => {
                return Err(Error::new(vec![span], UnbalancedParentheses { opening: true }));
            },
        }
    }

    if output.is_empty() {
        return Err(Error::new(vec![0..0], EmptyExpression));
    }

    Ok(output)
}

/// Tokenizes the input and converts it to postfix order.
pub fn parse_postfix(input: &str) -> Result<Vec<RpnToken>, Error> {
    to_postfix(&tokenize_complete(input))
}
