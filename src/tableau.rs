//! Tableau satisfiability engine.
//!
//! Open branches wait in a worklist. Each step pops one branch and either
//! closes it (an atom and its negation both present), records it as an open
//! leaf (nothing left but literals), or sweeps it once: every formula on the
//! branch is expanded by its rule and the resulting children are queued.
//!
//! Constants for the delta rule come from a pool of at most [`MAX_CONSTANTS`]
//! letters shared by the whole check. Each branch remembers the constants
//! introduced on it and the universal formulas it has met; both pass down to
//! its children. A universal formula is instantiated at the branch's own
//! constants, and again at every constant introduced further down. When a
//! witness is needed and the pool is empty, the check gives up with
//! [`Verdict::BudgetExceeded`].
//!
//! What happens on a branch depends only on its ancestors, so the verdict
//! is the same under either [`Schedule`].

use crate::formula::{Atom, Formula};
use crate::rules::{self, Expansion};
use std::collections::{HashSet, VecDeque};
use tracing::{debug, trace};

/// Default bound on fresh constants per check.
pub const MAX_CONSTANTS: usize = 10;

/// Letters handed out as fresh constants, in order.
pub const CONSTANT_POOL: [char; MAX_CONSTANTS] =
    ['c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l'];

/// Outcome of a satisfiability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Every branch closed.
    Unsatisfiable = 0,
    /// Some branch stayed open after full expansion.
    Satisfiable = 1,
    /// The constant pool ran out first.
    BudgetExceeded = 2,
}

impl Verdict {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn description(self) -> &'static str {
        match self {
            Verdict::Unsatisfiable => "is not satisfiable",
            Verdict::Satisfiable => "is satisfiable",
            Verdict::BudgetExceeded => "may or may not be satisfiable",
        }
    }
}

/// Order in which queued branches are taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schedule {
    /// Oldest branch first.
    #[default]
    BreadthFirst,
    /// Newest branch first.
    DepthFirst,
}

#[derive(Debug, Clone)]
pub struct TableauConfig {
    /// Number of fresh constants available; clamped to the pool size.
    pub max_constants: usize,
    pub schedule: Schedule,
}

impl Default for TableauConfig {
    fn default() -> Self {
        TableauConfig {
            max_constants: MAX_CONSTANTS,
            schedule: Schedule::default(),
        }
    }
}

/// Counters for one check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableauStats {
    pub branches_processed: usize,
    pub closed_branches: usize,
    /// Leaves of the tableau so far: one for the root, plus one for every
    /// extra child a sweep produced.
    pub leaf_branches: usize,
    pub open_leaves: usize,
    pub beta_splits: usize,
    pub constants_introduced: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableauOutcome {
    pub verdict: Verdict,
    pub stats: TableauStats,
}

/// The formulas assumed true along one path, with the constants introduced
/// on it and the universal formulas it has met. Children inherit both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableauBranch {
    formulas: Vec<Formula>,
    constants: Vec<char>,
    /// Universal formulas as (variable, body).
    gammas: Vec<(char, Formula)>,
}

impl TableauBranch {
    pub fn new(formulas: Vec<Formula>) -> Self {
        TableauBranch {
            formulas,
            ..Default::default()
        }
    }

    pub fn push(&mut self, formula: Formula) {
        self.formulas.push(formula);
    }

    fn signed_atoms(&self) -> impl Iterator<Item = (bool, Atom)> + '_ {
        self.formulas.iter().filter_map(|f| f.normalize().literal())
    }

    /// First atom that occurs both plainly and negated.
    pub fn find_contradiction(&self) -> Option<Atom> {
        let mut pos = HashSet::new();
        let mut neg = HashSet::new();
        for (sign, atom) in self.signed_atoms() {
            if sign {
                pos.insert(atom);
            } else {
                neg.insert(atom);
            }
        }
        pos.intersection(&neg).next().copied()
    }

    pub fn is_closed(&self) -> bool {
        self.find_contradiction().is_some()
    }

    /// Whether nothing but literals is left to expand.
    pub fn all_literals(&self) -> bool {
        self.formulas.iter().all(|f| f.normalize().is_literal())
    }

    /// An empty branch carrying this one's constants and universal formulas.
    fn child(&self) -> TableauBranch {
        TableauBranch {
            formulas: Vec::new(),
            constants: self.constants.clone(),
            gammas: self.gammas.clone(),
        }
    }

    /// Remember a universal formula. Returns false if it was already known.
    fn register_gamma(&mut self, var: char, body: &Formula) -> bool {
        if self.gammas.iter().any(|(v, b)| *v == var && b == body) {
            return false;
        }
        self.gammas.push((var, body.clone()));
        true
    }

    /// Add a fresh constant along with every known universal formula
    /// instantiated at it.
    fn introduce(&mut self, constant: char) {
        self.constants.push(constant);
        let instances: Vec<Formula> = self
            .gammas
            .iter()
            .map(|(var, body)| body.substitute(*var, constant))
            .collect();
        self.formulas.extend(instances);
    }

    /// Instantiate `body` at every constant already on the branch.
    fn instantiate(&mut self, var: char, body: &Formula) {
        let instances: Vec<Formula> =
            self.constants.iter().map(|&c| body.substitute(var, c)).collect();
        self.formulas.extend(instances);
    }
}

/// Raised when a fresh constant is needed but the pool is empty.
#[derive(Debug)]
struct BudgetExhausted;

/// Constant pool shared by every branch of one check.
#[derive(Debug, Default)]
struct ExpansionContext {
    used: Vec<char>,
    available: VecDeque<char>,
}

impl ExpansionContext {
    fn new(max_constants: usize) -> Self {
        let n = max_constants.min(CONSTANT_POOL.len());
        ExpansionContext {
            used: Vec::new(),
            available: CONSTANT_POOL[..n].iter().copied().collect(),
        }
    }

    fn fresh_constant(&mut self) -> Result<char, BudgetExhausted> {
        let c = self.available.pop_front().ok_or(BudgetExhausted)?;
        self.used.push(c);
        Ok(c)
    }
}

/// The satisfiability engine. One instance can run many checks; all shared
/// state is reset at the start of each.
pub struct Tableau {
    config: TableauConfig,
    ctx: ExpansionContext,
    worklist: VecDeque<TableauBranch>,
    stats: TableauStats,
}

impl Tableau {
    pub fn new(config: TableauConfig) -> Self {
        Tableau {
            ctx: ExpansionContext::new(config.max_constants),
            config,
            worklist: VecDeque::new(),
            stats: TableauStats::default(),
        }
    }

    fn reset(&mut self) {
        self.ctx = ExpansionContext::new(self.config.max_constants);
        self.worklist.clear();
        self.stats = TableauStats::default();
    }

    fn next_branch(&mut self) -> Option<TableauBranch> {
        match self.config.schedule {
            Schedule::BreadthFirst => self.worklist.pop_front(),
            Schedule::DepthFirst => self.worklist.pop_back(),
        }
    }

    fn outcome(&self, verdict: Verdict) -> TableauOutcome {
        TableauOutcome {
            verdict,
            stats: self.stats.clone(),
        }
    }

    /// Decide whether `formula` is satisfiable.
    pub fn check(&mut self, formula: &Formula) -> TableauOutcome {
        self.reset();
        self.stats.leaf_branches = 1;
        self.worklist.push_back(TableauBranch::new(vec![formula.clone()]));

        while let Some(branch) = self.next_branch() {
            self.stats.branches_processed += 1;

            if let Some(atom) = branch.find_contradiction() {
                trace!(%atom, "branch closed");
                self.stats.closed_branches += 1;
                continue;
            }
            if branch.all_literals() {
                trace!(size = branch.formulas.len(), "open leaf");
                self.stats.open_leaves += 1;
                continue;
            }

            match self.expand_branch(branch) {
                Ok(children) => {
                    self.stats.leaf_branches += children.len() - 1;
                    self.worklist.extend(children);
                }
                Err(BudgetExhausted) => {
                    debug!(%formula, used = self.ctx.used.len(), "constant budget exhausted");
                    return self.outcome(Verdict::BudgetExceeded);
                }
            }
        }

        let verdict = if self.stats.closed_branches == self.stats.leaf_branches {
            Verdict::Unsatisfiable
        } else {
            Verdict::Satisfiable
        };
        debug!(%formula, ?verdict, stats = ?self.stats, "tableau finished");
        self.outcome(verdict)
    }

    /// Expand every formula on `branch` once. Returns the children, which
    /// always number at least one.
    fn expand_branch(
        &mut self,
        branch: TableauBranch,
    ) -> Result<Vec<TableauBranch>, BudgetExhausted> {
        let mut children = vec![branch.child()];

        for node in branch.formulas {
            let node = node.normalize();
            let expansion = rules::expand(&node);
            trace!(%node, rule = expansion.rule_name(), "expand");

            match expansion {
                Expansion::Add(a, b) => {
                    for child in &mut children {
                        child.push(a.clone());
                        child.push(b.clone());
                    }
                }
                Expansion::Branch(left, right) => {
                    self.stats.beta_splits += 1;
                    trace!(from = children.len(), "beta split");
                    children = children
                        .into_iter()
                        .flat_map(|child| {
                            let mut l = child.clone();
                            l.push(left.clone());
                            let mut r = child;
                            r.push(right.clone());
                            [l, r]
                        })
                        .collect();
                }
                Expansion::Witness { var, body } => {
                    let constant = self.ctx.fresh_constant()?;
                    self.stats.constants_introduced += 1;
                    trace!(%constant, "fresh constant");

                    let witness = body.substitute(var, constant);
                    for child in &mut children {
                        child.push(witness.clone());
                        child.introduce(constant);
                    }
                }
                Expansion::Instantiate { var, body } => {
                    for child in &mut children {
                        child.register_gamma(var, &body);
                        child.instantiate(var, &body);
                    }
                }
                Expansion::None => {
                    for child in &mut children {
                        child.push(node.clone());
                    }
                }
            }
        }

        Ok(children)
    }
}

impl Default for Tableau {
    fn default() -> Self {
        Self::new(TableauConfig::default())
    }
}
