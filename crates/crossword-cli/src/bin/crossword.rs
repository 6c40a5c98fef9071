//! Fills a crossword structure with words from a list.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin crossword -- crates/crossword-cli/data/structure0.txt crates/crossword-cli/data/words0.txt
//! ```
//!
//! Save the filled grid as well as printing it:
//!
//! ```sh
//! cargo run --bin crossword -- structure.txt words.txt output.txt
//! ```
//!
//! Compare heuristics (set `RUST_LOG=info` to see the search counters):
//!
//! ```sh
//! RUST_LOG=info cargo run --bin crossword -- --variable-order input --value-order domain structure.txt words.txt
//! ```

use std::{path::PathBuf, process};

use clap::{Parser, ValueEnum};
use crossword_cli::{CliError, Puzzle};
use crossword_solver::{CrosswordSolver, ValueOrder, VariableOrder};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariableOrderArg {
    /// Fewest remaining words first, ties broken by most crossings.
    Mrv,
    /// Slots in reading order.
    Input,
}

impl From<VariableOrderArg> for VariableOrder {
    fn from(arg: VariableOrderArg) -> Self {
        match arg {
            VariableOrderArg::Mrv => Self::MinimumRemainingValues,
            VariableOrderArg::Input => Self::InputOrder,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ValueOrderArg {
    /// Words ruling out the fewest crossing candidates first.
    Lcv,
    /// Alphabetical order.
    Domain,
}

impl From<ValueOrderArg> for ValueOrder {
    fn from(arg: ValueOrderArg) -> Self {
        match arg {
            ValueOrderArg::Lcv => Self::LeastConstraining,
            ValueOrderArg::Domain => Self::DomainOrder,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Structure file: one row per line, `_` for fillable cells.
    structure: PathBuf,

    /// Words file: one word per line.
    words: PathBuf,

    /// File to save the filled grid to.
    output: Option<PathBuf>,

    /// How the search picks the next slot.
    #[arg(long, value_name = "ORDER", default_value = "mrv")]
    variable_order: VariableOrderArg,

    /// How the search orders candidate words.
    #[arg(long, value_name = "ORDER", default_value = "lcv")]
    value_order: ValueOrderArg,
}

fn run(args: &Args) -> Result<(), CliError> {
    let puzzle = Puzzle::load(&args.structure, &args.words)?;
    let solver = CrosswordSolver::new()
        .with_variable_order(args.variable_order.into())
        .with_value_order(args.value_order.into());

    let Some(grid) = puzzle.solve(&solver)? else {
        println!("No solution.");
        return Ok(());
    };
    print!("{grid}");
    if let Some(output) = &args.output {
        crossword_cli::save(output, &grid)?;
        log::info!("saved grid to {}", output.display());
    }
    Ok(())
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
