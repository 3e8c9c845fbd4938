//! Batch input and the sentences reported for it.
//!
//! A batch is a text whose first line switches the modes on (`PARSE`, `SAT`,
//! or both) and whose remaining lines each hold one formula.

use crate::classify::{classify, Category};
use crate::parser::parse;
use crate::tableau::{Tableau, TableauConfig};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modes {
    pub parse: bool,
    pub sat: bool,
}

impl Modes {
    pub fn from_header(line: &str) -> Self {
        Modes {
            parse: line.contains("PARSE"),
            sat: line.contains("SAT"),
        }
    }
}

/// `"<line> is <category>."`, plus the two sides and the connective for
/// binary formulas.
pub fn parse_sentence(line: &str) -> String {
    let category = classify(line);
    let mut out = format!("{} is {}.", line, category.description());
    if !category.is_binary() {
        return out;
    }
    if let Ok(formula) = parse(line) {
        if let Some((lhs, op, rhs)) = formula.split_binary() {
            out.push_str(&format!(
                " Its left hand side is {}, its connective is {}, and its right hand side is {}.",
                lhs, op, rhs
            ));
        }
    }
    out
}

/// `"<line> <verdict>."`, or `"<line> is not a formula."` for category 0.
pub fn sat_sentence(line: &str, tableau: &mut Tableau) -> String {
    if classify(line) == Category::NotAFormula {
        return format!("{} is not a formula.", line);
    }
    match parse(line) {
        Ok(formula) => {
            let outcome = tableau.check(&formula);
            format!("{} {}.", line, outcome.verdict.description())
        }
        Err(_) => format!("{} is not a formula.", line),
    }
}

/// Run a whole batch and return the output lines in order.
pub fn run_batch(text: &str, config: TableauConfig) -> Vec<String> {
    let mut lines = text.lines();
    let modes = lines.next().map(Modes::from_header).unwrap_or_default();
    debug!(?modes, "batch header");

    let mut tableau = Tableau::new(config);
    let mut out = Vec::new();
    for line in lines {
        let line = line.trim_end_matches('\r');
        if modes.parse {
            out.push(parse_sentence(line));
        }
        if modes.sat {
            out.push(sat_sentence(line, &mut tableau));
        }
    }
    out
}
