//! Formula lexer.
//!
//! A single left-to-right scan. Two-character connectives are matched before
//! single characters; whitespace and any character outside the alphabets are
//! skipped without complaint.

use crate::error::LexError;

/// Predicate symbols.
pub const PREDICATES: &str = "PQRS";
/// Propositional variables.
pub const PROP_VARS: &str = "pqrs";
/// First-order variables. The tail `c..l` doubles as the constant pool.
pub const FOL_VARS: &str = "xyzwcdefghijkl";

pub const AND_SYM: &str = "/\\";
pub const OR_SYM: &str = "\\/";
pub const IMP_SYM: &str = "=>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    LPar,
    RPar,
    Comma,
    Not,
    And,
    Or,
    Imp,
    Forall,
    Exists,
    Pred(char),
    PropVar(char),
    FolVar(char),
}

/// Tokenize a formula.
///
/// Fails if a binary connective appears in a text without both bracket kinds,
/// or if the opening and closing bracket counts differ.
pub fn tokenize(s: &str) -> Result<Vec<Token>, LexError> {
    let has_connective = [AND_SYM, OR_SYM, IMP_SYM].iter().any(|op| s.contains(op));
    if has_connective && !(s.contains('(') && s.contains(')')) {
        return Err(LexError::MissingBrackets);
    }

    let open = s.matches('(').count();
    let close = s.matches(')').count();
    if open != close {
        return Err(LexError::UnbalancedBrackets { open, close });
    }

    let chs: Vec<char> = s.chars().collect();
    let n = chs.len();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < n {
        if i + 1 < n {
            let two = match (chs[i], chs[i + 1]) {
                ('/', '\\') => Some(Token::And),
                ('\\', '/') => Some(Token::Or),
                ('=', '>') => Some(Token::Imp),
                _ => None,
            };
            if let Some(tok) = two {
                tokens.push(tok);
                i += 2;
                continue;
            }
        }

        let c = chs[i];
        let tok = match c {
            '(' => Some(Token::LPar),
            ')' => Some(Token::RPar),
            ',' => Some(Token::Comma),
            '~' => Some(Token::Not),
            'A' => Some(Token::Forall),
            'E' => Some(Token::Exists),
            _ if PREDICATES.contains(c) => Some(Token::Pred(c)),
            _ if PROP_VARS.contains(c) => Some(Token::PropVar(c)),
            _ if FOL_VARS.contains(c) => Some(Token::FolVar(c)),
            _ => None,
        };
        if let Some(tok) = tok {
            tokens.push(tok);
        }
        i += 1;
    }

    Ok(tokens)
}
