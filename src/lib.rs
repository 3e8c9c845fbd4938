//! tableau-sat - satisfiability by semantic tableaux
//!
//! Decides satisfiability for a small fragment of first-order logic: binary
//! predicates `P Q R S`, propositional letters `p q r s`, single-letter
//! variables and one-variable quantifiers `A` (forall) / `E` (exists).
//!
//! The pipeline is text → [`lexer`] → [`parser`] → [`Formula`], after which
//! [`classify`] assigns a syntactic category and [`Tableau`] runs the
//! expansion rules:
//!
//! - **Alpha**: conjunctive formulas extend the branch
//! - **Beta**: disjunctive formulas split the branch
//! - **Delta**: existentials introduce a fresh constant
//! - **Gamma**: universals are instantiated with every constant in use
//!
//! Fresh constants come from a fixed pool of ten letters. When the pool runs
//! dry the check stops with [`Verdict::BudgetExceeded`].
//!
//! # Example
//!
//! ```
//! use tableau_sat::{check_satisfiability, classify, Category, Verdict};
//!
//! assert_eq!(classify("(p/\\~p)"), Category::PropositionalBinary);
//! assert_eq!(check_satisfiability("(p/\\~p)").unwrap(), Verdict::Unsatisfiable);
//! assert_eq!(check_satisfiability("(p\\/~p)").unwrap(), Verdict::Satisfiable);
//! ```

pub mod classify;
pub mod error;
pub mod formula;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod report;
pub mod rules;
pub mod tableau;

pub use classify::{classify, classify_formula, Category};
pub use error::{LexError, ParseError};
pub use formula::{Atom, Connective, Formula};
pub use lexer::{tokenize, Token};
pub use parser::{parse, Parser};
pub use tableau::{
    Schedule, Tableau, TableauBranch, TableauConfig, TableauOutcome, TableauStats, Verdict,
    CONSTANT_POOL, MAX_CONSTANTS,
};

/// Parse `input` and run a tableau check with the default configuration.
///
/// Category `0` inputs that still parse (formulas mixing propositional and
/// first-order content) are checked like any other formula; callers that
/// follow the batch protocol consult [`classify`] first.
pub fn check_satisfiability(input: &str) -> Result<Verdict, ParseError> {
    let formula = parse(input)?;
    let mut tableau = Tableau::new(TableauConfig::default());
    Ok(tableau.check(&formula).verdict)
}
