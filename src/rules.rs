//! Tableau expansion rules.
//!
//! Each formula on a branch falls into exactly one case, tried in the order
//! alpha, beta, delta, gamma, literal. Callers normalize the formula first
//! (see [`Formula::normalize`]), so `~~A`, `~AxA` and `~ExA` never reach
//! [`expand`].

use crate::formula::Formula;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expansion {
    /// Alpha: both formulas join the same branch.
    Add(Formula, Formula),
    /// Beta: the branch splits, one side per formula.
    Branch(Formula, Formula),
    /// Delta: `body` holds for a fresh constant in place of `var`.
    Witness { var: char, body: Formula },
    /// Gamma: `body` holds for every constant in place of `var`.
    Instantiate { var: char, body: Formula },
    /// Literal or predicate; carried forward unchanged.
    None,
}

impl Expansion {
    pub fn rule_name(&self) -> &'static str {
        match self {
            Expansion::Add(..) => "alpha",
            Expansion::Branch(..) => "beta",
            Expansion::Witness { .. } => "delta",
            Expansion::Instantiate { .. } => "gamma",
            Expansion::None => "literal",
        }
    }
}

/// Pick the expansion for a normalized formula.
pub fn expand(formula: &Formula) -> Expansion {
    use Formula::*;
    match formula {
        // A /\ B => A, B
        And(a, b) => Expansion::Add((**a).clone(), (**b).clone()),
        Not(inner) => match &**inner {
            // ~(A \/ B) => ~A, ~B
            Or(a, b) => Expansion::Add(Formula::not((**a).clone()), Formula::not((**b).clone())),
            // ~(A => B) => A, ~B
            Implies(a, b) => Expansion::Add((**a).clone(), Formula::not((**b).clone())),
            // ~(A /\ B) => ~A | ~B
            And(a, b) => {
                Expansion::Branch(Formula::not((**a).clone()), Formula::not((**b).clone()))
            }
            _ => Expansion::None,
        },
        // A \/ B => A | B
        Or(a, b) => Expansion::Branch((**a).clone(), (**b).clone()),
        // A => B => ~A | B
        Implies(a, b) => Expansion::Branch(Formula::not((**a).clone()), (**b).clone()),
        Exists(var, body) => Expansion::Witness {
            var: *var,
            body: (**body).clone(),
        },
        Forall(var, body) => Expansion::Instantiate {
            var: *var,
            body: (**body).clone(),
        },
        PropVar(_) | FolVar(_) | Pred(..) => Expansion::None,
    }
}
