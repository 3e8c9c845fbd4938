//! Recursive-descent formula parser.
//!
//! ```text
//! formula := PROP_VAR | FOL_VAR
//!          | '~' formula
//!          | ('A'|'E') FOL_VAR formula
//!          | PRED '(' formula (',' formula)* ')'
//!          | '(' formula ('/\' | '\/' | '=>') formula ')'
//! ```
//!
//! One token of lookahead over an immutable token slice; every token is
//! consumed at most once.

use crate::error::ParseError;
use crate::formula::{Connective, Formula};
use crate::lexer::{tokenize, Token};

/// Parse a complete formula. Leftover tokens are an error.
pub fn parse(input: &str) -> Result<Formula, ParseError> {
    let toks = tokenize(input)?;
    let mut parser = Parser::new(&toks);
    let formula = parser.parse_formula()?;
    parser.finish()?;
    Ok(formula)
}

pub struct Parser<'a> {
    toks: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(toks: &'a [Token]) -> Self {
        Parser { toks, pos: 0 }
    }

    fn peek(&self) -> Option<Token> {
        self.toks.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let tok = self.peek();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn eat(&mut self, expected: Token) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn next_token(&mut self, expected: &'static str) -> Result<Token, ParseError> {
        self.bump().ok_or(ParseError::UnexpectedEnd { expected })
    }

    fn unexpected(&self, found: Token, expected: &'static str) -> ParseError {
        ParseError::UnexpectedToken {
            found: found.to_string(),
            pos: self.pos - 1,
            expected,
        }
    }

    fn expect(&mut self, tok: Token, expected: &'static str) -> Result<(), ParseError> {
        let found = self.next_token(expected)?;
        if found == tok {
            Ok(())
        } else {
            Err(self.unexpected(found, expected))
        }
    }

    /// Check that every token has been consumed.
    pub fn finish(&self) -> Result<(), ParseError> {
        if self.pos < self.toks.len() {
            return Err(ParseError::TrailingTokens { pos: self.pos });
        }
        Ok(())
    }

    pub fn parse_formula(&mut self) -> Result<Formula, ParseError> {
        match self.next_token("a formula")? {
            Token::PropVar(v) => Ok(Formula::PropVar(v)),
            Token::FolVar(v) => Ok(Formula::FolVar(v)),
            Token::Not => Ok(Formula::not(self.parse_formula()?)),
            Token::Forall => {
                let var = self.parse_bound_var()?;
                Ok(Formula::forall(var, self.parse_formula()?))
            }
            Token::Exists => {
                let var = self.parse_bound_var()?;
                Ok(Formula::exists(var, self.parse_formula()?))
            }
            Token::Pred(name) => self.parse_predicate(name),
            Token::LPar => self.parse_binary(),
            other => Err(self.unexpected(other, "a formula")),
        }
    }

    fn parse_bound_var(&mut self) -> Result<char, ParseError> {
        match self.next_token("a quantified variable")? {
            Token::FolVar(v) => Ok(v),
            other => Err(self.unexpected(other, "a quantified variable")),
        }
    }

    fn parse_predicate(&mut self, name: char) -> Result<Formula, ParseError> {
        self.expect(Token::LPar, "`(` after a predicate symbol")?;
        let mut args = vec![self.parse_formula()?];
        while self.eat(Token::Comma) {
            args.push(self.parse_formula()?);
        }
        self.expect(Token::RPar, "`,` or `)` in predicate arguments")?;

        if args.len() != 2 {
            return Err(ParseError::PredicateArity {
                name,
                found: args.len(),
            });
        }
        let first = Self::argument(name, &args[0])?;
        let second = Self::argument(name, &args[1])?;
        Ok(Formula::Pred(name, first, second))
    }

    fn argument(name: char, arg: &Formula) -> Result<char, ParseError> {
        match arg {
            Formula::FolVar(v) => Ok(*v),
            other => Err(ParseError::PredicateArgument {
                name,
                found: other.to_string(),
            }),
        }
    }

    fn parse_binary(&mut self) -> Result<Formula, ParseError> {
        let left = self.parse_formula()?;
        let op = match self.next_token("a binary connective")? {
            Token::And => Connective::And,
            Token::Or => Connective::Or,
            Token::Imp => Connective::Implies,
            other => return Err(self.unexpected(other, "a binary connective")),
        };
        let right = self.parse_formula()?;
        self.expect(Token::RPar, "`)` closing a binary formula")?;
        Ok(Formula::binary(op, left, right))
    }
}
