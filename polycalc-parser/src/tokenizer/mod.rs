pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer, together with
/// their spans and lexemes.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(Ok(kind)) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn digits_merge() {
        compare_tokens("192343458", [(TokenKind::Int, "192343458")]);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "3+4*2",
            [
                (TokenKind::Int, "3"),
                (TokenKind::Add, "+"),
                (TokenKind::Int, "4"),
                (TokenKind::Mul, "*"),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn parenthesized_expr() {
        compare_tokens(
            "10^(3-1)/4",
            [
                (TokenKind::Int, "10"),
                (TokenKind::Exp, "^"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Int, "3"),
                (TokenKind::Sub, "-"),
                (TokenKind::Int, "1"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Div, "/"),
                (TokenKind::Int, "4"),
            ],
        );
    }

    #[test]
    fn variables_are_symbols() {
        compare_tokens(
            "5-x*(3/3)",
            [
                (TokenKind::Int, "5"),
                (TokenKind::Sub, "-"),
                (TokenKind::Symbol, "x"),
                (TokenKind::Mul, "*"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Int, "3"),
                (TokenKind::Div, "/"),
                (TokenKind::Int, "3"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn whitespace_tokenized() {
        compare_tokens(
            "1 +  y",
            [
                (TokenKind::Int, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, "  "),
                (TokenKind::Symbol, "y"),
            ],
        );
    }

    #[test]
    fn any_character_is_a_symbol() {
        compare_tokens(
            "$#",
            [
                (TokenKind::Symbol, "$"),
                (TokenKind::Symbol, "#"),
            ],
        );
    }
}
