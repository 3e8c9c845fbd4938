//! tableau-sat CLI
//!
//! - `tableau-sat '(p/\~p)'` - classify one formula and check it
//! - `tableau-sat` - same, reading the formula from stdin
//! - `tableau-sat -i input.txt` - run a batch file (`PARSE` / `SAT` header)

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::io::{self, Read};
use std::path::PathBuf;
use tableau_sat::report::run_batch;
use tableau_sat::{
    classify_formula, parse, Category, Schedule, Tableau, TableauConfig, MAX_CONSTANTS,
};
use tracing::Level;

#[derive(Parser)]
#[command(name = "tableau-sat")]
#[command(about = "Satisfiability of small first-order formulas by semantic tableaux")]
#[command(version)]
struct Cli {
    /// Formula to check; read from stdin when absent
    formula: Vec<String>,
    /// Batch file: a PARSE/SAT header line, then one formula per line
    #[arg(short, long, conflicts_with = "formula")]
    input: Option<PathBuf>,
    /// Fresh constants available to the delta rule (at most 10)
    #[arg(long, default_value_t = MAX_CONSTANTS)]
    max_constants: usize,
    /// Expand the newest branch first instead of the oldest
    #[arg(long)]
    depth_first: bool,
    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = TableauConfig {
        max_constants: cli.max_constants,
        schedule: if cli.depth_first {
            Schedule::DepthFirst
        } else {
            Schedule::BreadthFirst
        },
    };

    if let Some(path) = &cli.input {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        for line in run_batch(&text, config) {
            println!("{}", line);
        }
        return Ok(());
    }

    let formula_str = if cli.formula.is_empty() {
        let mut s = String::new();
        io::stdin()
            .read_to_string(&mut s)
            .context("reading formula from stdin")?;
        s.trim().to_string()
    } else {
        cli.formula.join(" ")
    };

    let formula = match parse(&formula_str) {
        Ok(f) => f,
        Err(e) => {
            println!("{} is not a formula: {}", formula_str, e);
            return Ok(());
        }
    };

    let category = classify_formula(&formula);
    println!("Formula: {}", formula);
    println!("Category {}: {}", category.code(), category.description());
    if category == Category::NotAFormula {
        return Ok(());
    }
    if let Some((lhs, op, rhs)) = formula.split_binary() {
        println!("  left: {}  connective: {}  right: {}", lhs, op, rhs);
    }

    let outcome = Tableau::new(config).check(&formula);
    println!(
        "Verdict {}: {} {}",
        outcome.verdict.code(),
        formula,
        outcome.verdict.description()
    );
    println!(
        "  branches: {} processed, {} closed, {} open; constants introduced: {}",
        outcome.stats.branches_processed,
        outcome.stats.closed_branches,
        outcome.stats.open_leaves,
        outcome.stats.constants_introduced
    );
    Ok(())
}
