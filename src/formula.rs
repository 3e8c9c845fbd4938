//! Formula AST.

/// Binary connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    And,
    Or,
    Implies,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    PropVar(char),
    FolVar(char),
    Not(Box<Formula>),
    Forall(char, Box<Formula>),
    Exists(char, Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    /// Binary predicate; both arguments are first-order variable letters.
    Pred(char, char, char),
}

/// The atom under a literal, used for closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Atom {
    Var(char),
    Pred(char, char, char),
}

impl Formula {
    pub fn not(f: Formula) -> Formula {
        Formula::Not(Box::new(f))
    }

    pub fn and(a: Formula, b: Formula) -> Formula {
        Formula::And(Box::new(a), Box::new(b))
    }

    pub fn or(a: Formula, b: Formula) -> Formula {
        Formula::Or(Box::new(a), Box::new(b))
    }

    pub fn implies(a: Formula, b: Formula) -> Formula {
        Formula::Implies(Box::new(a), Box::new(b))
    }

    pub fn forall(var: char, body: Formula) -> Formula {
        Formula::Forall(var, Box::new(body))
    }

    pub fn exists(var: char, body: Formula) -> Formula {
        Formula::Exists(var, Box::new(body))
    }

    pub fn binary(op: Connective, a: Formula, b: Formula) -> Formula {
        match op {
            Connective::And => Formula::and(a, b),
            Connective::Or => Formula::or(a, b),
            Connective::Implies => Formula::implies(a, b),
        }
    }

    /// Left side, connective and right side of a binary formula.
    pub fn split_binary(&self) -> Option<(&Formula, Connective, &Formula)> {
        match self {
            Formula::And(a, b) => Some((&**a, Connective::And, &**b)),
            Formula::Or(a, b) => Some((&**a, Connective::Or, &**b)),
            Formula::Implies(a, b) => Some((&**a, Connective::Implies, &**b)),
            _ => None,
        }
    }

    /// Sign and atom if this is a literal: a variable or predicate, possibly
    /// negated once.
    pub fn literal(&self) -> Option<(bool, Atom)> {
        match self {
            Formula::PropVar(v) | Formula::FolVar(v) => Some((true, Atom::Var(*v))),
            Formula::Pred(p, a, b) => Some((true, Atom::Pred(*p, *a, *b))),
            Formula::Not(inner) => match inner.literal() {
                Some((true, atom)) => Some((false, atom)),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        self.literal().is_some()
    }

    /// Whether any node of the tree is first-order: a first-order variable,
    /// a predicate or a quantifier. Predicates count on their own, whatever
    /// their arguments.
    pub fn contains_first_order(&self) -> bool {
        match self {
            Formula::FolVar(_) | Formula::Pred(..) | Formula::Forall(..) | Formula::Exists(..) => {
                true
            }
            Formula::PropVar(_) => false,
            Formula::Not(inner) => inner.contains_first_order(),
            Formula::And(a, b) | Formula::Or(a, b) | Formula::Implies(a, b) => {
                a.contains_first_order() || b.contains_first_order()
            }
        }
    }

    /// Whether any node of the tree is a propositional variable.
    pub fn contains_propositional(&self) -> bool {
        match self {
            Formula::PropVar(_) => true,
            Formula::FolVar(_) | Formula::Pred(..) => false,
            Formula::Not(inner) | Formula::Forall(_, inner) | Formula::Exists(_, inner) => {
                inner.contains_propositional()
            }
            Formula::And(a, b) | Formula::Or(a, b) | Formula::Implies(a, b) => {
                a.contains_propositional() || b.contains_propositional()
            }
        }
    }

    /// Strip double negations and push negation through quantifiers until
    /// the top of the formula no longer changes.
    ///
    /// `~~A` becomes `A`, `~AxA` becomes `Ex~A`, `~ExA` becomes `Ax~A`.
    pub fn normalize(&self) -> Formula {
        let mut current = self.clone();
        loop {
            current = match current {
                Formula::Not(inner) => match *inner {
                    Formula::Not(a) => *a,
                    Formula::Forall(v, a) => Formula::exists(v, Formula::Not(a)),
                    Formula::Exists(v, a) => Formula::forall(v, Formula::Not(a)),
                    other => return Formula::not(other),
                },
                other => return other,
            };
        }
    }

    /// Replace the free occurrences of `var` with `constant`.
    ///
    /// Occurrences under a quantifier that rebinds `var` are left alone.
    pub fn substitute(&self, var: char, constant: char) -> Formula {
        let swap = |v: char| if v == var { constant } else { v };
        match self {
            Formula::PropVar(_) => self.clone(),
            Formula::FolVar(v) => Formula::FolVar(swap(*v)),
            Formula::Pred(p, a, b) => Formula::Pred(*p, swap(*a), swap(*b)),
            Formula::Not(inner) => Formula::not(inner.substitute(var, constant)),
            Formula::Forall(v, _) | Formula::Exists(v, _) if *v == var => self.clone(),
            Formula::Forall(v, body) => Formula::forall(*v, body.substitute(var, constant)),
            Formula::Exists(v, body) => Formula::exists(*v, body.substitute(var, constant)),
            Formula::And(a, b) => {
                Formula::and(a.substitute(var, constant), b.substitute(var, constant))
            }
            Formula::Or(a, b) => {
                Formula::or(a.substitute(var, constant), b.substitute(var, constant))
            }
            Formula::Implies(a, b) => {
                Formula::implies(a.substitute(var, constant), b.substitute(var, constant))
            }
        }
    }
}
