//! Property-based tests for the parser, classifier and tableau.

use proptest::prelude::*;
use proptest::sample::select;
use std::collections::HashMap;
use tableau_sat::lexer::PREDICATES;
use tableau_sat::{
    classify, parse, Category, Formula, Schedule, Tableau, TableauConfig, Verdict, MAX_CONSTANTS,
};

// ============================================================================
// Strategies
// ============================================================================

fn prop_var() -> impl Strategy<Value = char> {
    select(vec!['p', 'q', 'r', 's'])
}

fn fol_var() -> impl Strategy<Value = char> {
    select("xyzwcdefghijkl".chars().collect::<Vec<_>>())
}

fn predicate() -> impl Strategy<Value = char> {
    select(PREDICATES.chars().collect::<Vec<_>>())
}

/// Any AST the grammar can express, mixed content included.
fn any_formula() -> impl Strategy<Value = Formula> {
    let leaf = prop_oneof![
        prop_var().prop_map(Formula::PropVar),
        fol_var().prop_map(Formula::FolVar),
        (predicate(), fol_var(), fol_var()).prop_map(|(p, a, b)| Formula::Pred(p, a, b)),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Formula::not),
            (fol_var(), inner.clone()).prop_map(|(v, f)| Formula::forall(v, f)),
            (fol_var(), inner.clone()).prop_map(|(v, f)| Formula::exists(v, f)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::and(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::or(a, b)),
            (inner.clone(), inner).prop_map(|(a, b)| Formula::implies(a, b)),
        ]
    })
}

fn propositional_formula() -> impl Strategy<Value = Formula> {
    prop_var()
        .prop_map(Formula::PropVar)
        .prop_recursive(4, 24, 2, |inner| {
            prop_oneof![
                inner.clone().prop_map(Formula::not),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::and(a, b)),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::or(a, b)),
                (inner.clone(), inner).prop_map(|(a, b)| Formula::implies(a, b)),
            ]
        })
}

/// First-order formulas over `x y z w` that never rebind `x`.
fn x_free_formula() -> impl Strategy<Value = Formula> {
    let var = select(vec!['x', 'y', 'z', 'w']);
    let leaf = prop_oneof![
        var.clone().prop_map(Formula::FolVar),
        (predicate(), var.clone(), var).prop_map(|(p, a, b)| Formula::Pred(p, a, b)),
    ];
    leaf.prop_recursive(3, 16, 2, |inner| {
        let bound = select(vec!['y', 'z', 'w']);
        prop_oneof![
            inner.clone().prop_map(Formula::not),
            (bound.clone(), inner.clone()).prop_map(|(v, f)| Formula::forall(v, f)),
            (bound, inner.clone()).prop_map(|(v, f)| Formula::exists(v, f)),
            (inner.clone(), inner).prop_map(|(a, b)| Formula::and(a, b)),
        ]
    })
}

/// First-order formulas over `x y z w`, quantifiers included. Constants
/// handed out by the tableau never clash with these letters.
fn first_order_formula() -> impl Strategy<Value = Formula> {
    let var = select(vec!['x', 'y', 'z', 'w']);
    let leaf = prop_oneof![
        var.clone().prop_map(Formula::FolVar),
        (predicate(), var.clone(), var.clone()).prop_map(|(p, a, b)| Formula::Pred(p, a, b)),
    ];
    leaf.prop_recursive(4, 24, 2, move |inner| {
        prop_oneof![
            inner.clone().prop_map(Formula::not),
            (var.clone(), inner.clone()).prop_map(|(v, f)| Formula::forall(v, f)),
            (var.clone(), inner.clone()).prop_map(|(v, f)| Formula::exists(v, f)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::and(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::or(a, b)),
            (inner.clone(), inner).prop_map(|(a, b)| Formula::implies(a, b)),
        ]
    })
}

// ============================================================================
// Helpers
// ============================================================================

fn eval(f: &Formula, model: &HashMap<char, bool>) -> bool {
    match f {
        Formula::PropVar(v) => model[v],
        Formula::Not(a) => !eval(a, model),
        Formula::And(a, b) => eval(a, model) && eval(b, model),
        Formula::Or(a, b) => eval(a, model) || eval(b, model),
        Formula::Implies(a, b) => !eval(a, model) || eval(b, model),
        other => panic!("not propositional: {}", other),
    }
}

fn truth_table_satisfiable(f: &Formula) -> bool {
    (0..16u8).any(|bits| {
        let model: HashMap<char, bool> = ['p', 'q', 'r', 's']
            .iter()
            .enumerate()
            .map(|(i, v)| (*v, bits & (1 << i) != 0))
            .collect();
        eval(f, &model)
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_print_parse_round_trip(f in any_formula()) {
        let text = f.to_string();
        prop_assert_eq!(parse(&text), Ok(f));
    }

    #[test]
    fn prop_classification_is_total(s in "[pqxyPQAE~(),/\\\\=> #]{0,24}") {
        let category = classify(&s);
        prop_assert!(category.code() <= 8);
        match parse(&s) {
            Err(_) => prop_assert_eq!(category, Category::NotAFormula),
            Ok(f) => {
                let mixed = f.contains_first_order() && f.contains_propositional();
                prop_assert_eq!(category == Category::NotAFormula, mixed);
            }
        }
    }

    #[test]
    fn prop_propositional_verdict_matches_truth_table(f in propositional_formula()) {
        let outcome = Tableau::new(TableauConfig::default()).check(&f);
        let expected = if truth_table_satisfiable(&f) {
            Verdict::Satisfiable
        } else {
            Verdict::Unsatisfiable
        };
        prop_assert_eq!(outcome.verdict, expected, "{}", f);
        prop_assert_eq!(outcome.stats.constants_introduced, 0);
    }

    #[test]
    fn prop_schedules_agree_on_first_order_verdicts(f in first_order_formula()) {
        let check = |schedule| {
            Tableau::new(TableauConfig {
                max_constants: MAX_CONSTANTS,
                schedule,
            })
            .check(&f)
            .verdict
        };
        let bfs = check(Schedule::BreadthFirst);
        let dfs = check(Schedule::DepthFirst);
        if bfs != Verdict::BudgetExceeded && dfs != Verdict::BudgetExceeded {
            prop_assert_eq!(bfs, dfs, "{}", f);
        }
    }

    #[test]
    fn prop_structural_substitution_matches_textual(
        f in x_free_formula(),
        c in select(vec!['c', 'd', 'l']),
    ) {
        let textual = parse(&f.to_string().replace('x', &c.to_string())).unwrap();
        prop_assert_eq!(f.substitute('x', c), textual);
    }

    #[test]
    fn prop_check_always_reaches_a_verdict(f in any_formula()) {
        let outcome = Tableau::new(TableauConfig::default()).check(&f);
        prop_assert!(outcome.verdict.code() <= 2);
        prop_assert!(outcome.stats.closed_branches + outcome.stats.open_leaves
            <= outcome.stats.leaf_branches);
    }
}

#[test]
fn test_substitution_corpus_matches_textual() {
    for (body, var, constant) in [
        ("P(x,x)", 'x', 'c'),
        ("EyP(x,y)", 'x', 'd'),
        ("(P(x,y)=>~Q(y,x))", 'y', 'e'),
        ("Az(R(x,z)\\/~S(z,x))", 'x', 'l'),
        ("~~P(w,w)", 'w', 'c'),
    ] {
        let f = parse(body).unwrap();
        let textual = parse(&body.replace(var, &constant.to_string())).unwrap();
        assert_eq!(f.substitute(var, constant), textual, "{}", body);
    }
}
