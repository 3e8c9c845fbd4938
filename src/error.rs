//! Lexer and parser errors.

use thiserror::Error;

/// Structural problems caught before tokenizing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("binary connective used without brackets")]
    MissingBrackets,
    #[error("unbalanced brackets: {open} opening, {close} closing")]
    UnbalancedBrackets { open: usize, close: usize },
}

/// Why a token stream is not a formula.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },
    #[error("unexpected `{found}` at token {pos}, expected {expected}")]
    UnexpectedToken {
        found: String,
        pos: usize,
        expected: &'static str,
    },
    #[error("predicate {name} takes exactly 2 arguments, found {found}")]
    PredicateArity { name: char, found: usize },
    #[error("argument `{found}` of predicate {name} is not a first-order variable")]
    PredicateArgument { name: char, found: String },
    #[error("trailing input at token {pos}")]
    TrailingTokens { pos: usize },
}
