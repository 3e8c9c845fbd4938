//! Syntactic classification of formula text.

use crate::formula::Formula;
use crate::parser::parse;
use tracing::debug;

/// The nine categories a line of input can fall into. The discriminant is
/// the numeric code reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Lexing or parsing failed, or the formula mixes propositional and
    /// first-order content.
    NotAFormula = 0,
    /// A lone first-order variable or predicate.
    Atom = 1,
    FirstOrderNegation = 2,
    Universal = 3,
    Existential = 4,
    FirstOrderBinary = 5,
    Proposition = 6,
    PropositionalNegation = 7,
    PropositionalBinary = 8,
}

impl Category {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::NotAFormula => "not a formula",
            Category::Atom => "an atom",
            Category::FirstOrderNegation => "a negation of a first order logic formula",
            Category::Universal => "a universally quantified formula",
            Category::Existential => "an existentially quantified formula",
            Category::FirstOrderBinary => "a binary connective first order formula",
            Category::Proposition => "a proposition",
            Category::PropositionalNegation => "a negation of a propositional formula",
            Category::PropositionalBinary => "a binary connective propositional formula",
        }
    }

    /// Categories whose report includes the two sides and the connective.
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            Category::FirstOrderBinary | Category::PropositionalBinary
        )
    }
}

/// Lex, parse and classify a line of text.
pub fn classify(input: &str) -> Category {
    match parse(input) {
        Ok(formula) => classify_formula(&formula),
        Err(e) => {
            debug!(input, error = %e, "not a formula");
            Category::NotAFormula
        }
    }
}

/// Classify an already parsed formula.
pub fn classify_formula(formula: &Formula) -> Category {
    let first_order = formula.contains_first_order();
    if first_order && formula.contains_propositional() {
        debug!(%formula, "mixes propositional and first-order content");
        return Category::NotAFormula;
    }

    match formula {
        Formula::FolVar(_) | Formula::Pred(..) => Category::Atom,
        Formula::PropVar(_) => Category::Proposition,
        Formula::Not(_) if first_order => Category::FirstOrderNegation,
        Formula::Not(_) => Category::PropositionalNegation,
        Formula::Forall(..) => Category::Universal,
        Formula::Exists(..) => Category::Existential,
        Formula::And(..) | Formula::Or(..) | Formula::Implies(..) if first_order => {
            Category::FirstOrderBinary
        }
        Formula::And(..) | Formula::Or(..) | Formula::Implies(..) => Category::PropositionalBinary,
    }
}
