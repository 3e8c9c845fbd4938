//! Formula printer.
//!
//! Renders formulas in exactly the surface syntax the parser reads back:
//! binary formulas are always bracketed, and a quantifier, its variable and
//! its body are written with no separator (`AxP(x,x)`).

use crate::formula::{Atom, Connective, Formula};
use crate::lexer::{Token, AND_SYM, IMP_SYM, OR_SYM};
use std::fmt;

impl Connective {
    pub fn symbol(self) -> &'static str {
        match self {
            Connective::And => AND_SYM,
            Connective::Or => OR_SYM,
            Connective::Implies => IMP_SYM,
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::PropVar(v) | Formula::FolVar(v) => write!(f, "{}", v),
            Formula::Not(a) => write!(f, "~{}", a),
            Formula::Forall(v, a) => write!(f, "A{}{}", v, a),
            Formula::Exists(v, a) => write!(f, "E{}{}", v, a),
            Formula::Pred(p, a, b) => write!(f, "{}({},{})", p, a, b),
            Formula::And(a, b) => write!(f, "({}{}{})", a, AND_SYM, b),
            Formula::Or(a, b) => write!(f, "({}{}{})", a, OR_SYM, b),
            Formula::Implies(a, b) => write!(f, "({}{}{})", a, IMP_SYM, b),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Var(v) => write!(f, "{}", v),
            Atom::Pred(p, a, b) => write!(f, "{}({},{})", p, a, b),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LPar => f.write_str("("),
            Token::RPar => f.write_str(")"),
            Token::Comma => f.write_str(","),
            Token::Not => f.write_str("~"),
            Token::And => f.write_str(AND_SYM),
            Token::Or => f.write_str(OR_SYM),
            Token::Imp => f.write_str(IMP_SYM),
            Token::Forall => f.write_str("A"),
            Token::Exists => f.write_str("E"),
            Token::Pred(c) | Token::PropVar(c) | Token::FolVar(c) => write!(f, "{}", c),
        }
    }
}
