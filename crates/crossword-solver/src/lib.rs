//! Crossword solver.
//!
//! Filling a crossword is treated as a constraint satisfaction problem: each slot
//! is a variable, its domain is the set of words that may still go there, and
//! crossing slots must agree on their shared letter while no word is used twice.
//!
//! Solving runs in three phases:
//!
//! 1. **Node consistency** - [`DomainStore::enforce_node_consistency`] drops words
//!    of the wrong length.
//! 2. **Arc consistency** - [`arc_consistency::ac3`] prunes words that have no
//!    partner in a crossing slot. An emptied domain ends the solve immediately.
//! 3. **Backtracking search** - [`BacktrackSearch`] assigns slots one at a time,
//!    choosing slots by minimum remaining values (ties by degree) and trying words
//!    least-constraining first.
//!
//! [`CrosswordSolver`] runs all three.
//!
//! # Examples
//!
//! ```
//! use crossword_core::{Crossword, Vocabulary};
//! use crossword_solver::{CrosswordSolver, SolveOutcome};
//!
//! let crossword = Crossword::new("___\n_##\n_##".parse()?);
//! let vocabulary = Vocabulary::new(["CAT", "COW", "DOG"]);
//!
//! let (outcome, _stats) = CrosswordSolver::new().solve(&crossword, &vocabulary)?;
//! let SolveOutcome::Solved(assignment) = outcome else {
//!     panic!("expected a solution");
//! };
//! assert!(assignment.is_consistent(&crossword, &vocabulary));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    arc_consistency::ArcConsistency,
    backtrack_search::BacktrackSearch,
    cancel::CancelFlag,
    crossword_solver::{CrosswordSolver, SolveOutcome, Unsatisfiable},
    domain_store::DomainStore,
    error::SolverError,
    heuristics::{ValueOrder, VariableOrder},
    stats::SolverStats,
};

pub mod arc_consistency;
mod backtrack_search;
mod cancel;
mod crossword_solver;
mod domain_store;
mod error;
pub mod heuristics;
mod stats;

#[cfg(test)]
mod testing;
