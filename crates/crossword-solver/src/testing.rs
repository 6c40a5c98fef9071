//! Test utilities for the solver.
//!
//! Besides small constructors, this module provides [`PuzzleTester`], a fluent
//! harness that solves a puzzle and checks the outcome, and
//! [`brute_force_solve`], an exhaustive reference solver used to cross-check
//! the real one.

use crossword_core::{Assignment, Crossword, Direction, Variable, VariableId, Vocabulary};
use proptest::prelude::*;

use crate::{CrosswordSolver, DomainStore, SolveOutcome, SolverStats, Unsatisfiable};

/// A 3x3 ring of four slots, each crossing two others.
pub const RING: &str = "
    ___
    _#_
    ___
";

/// The demo puzzle shipped with the command line tool.
pub const DEMO_STRUCTURE: &str = "
    #___#
    #_##_
    #_##_
    #_##_
    #____
";

/// The vocabulary for [`DEMO_STRUCTURE`].
pub const DEMO_WORDS: &[&str] = &[
    "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE", "TEN",
];

/// Parses a layout, panicking on malformed input.
#[track_caller]
pub fn crossword(structure: &str) -> Crossword {
    Crossword::new(structure.parse().unwrap())
}

/// Builds a vocabulary from a word list.
pub fn vocabulary(words: &[&str]) -> Vocabulary {
    Vocabulary::new(words)
}

/// Short words over a small alphabet, so that random puzzles are sometimes solvable.
pub fn word_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ABC]{2,3}", 0..10)
}

/// Returns the current candidates of `id` as strings.
pub fn domain_words(vocabulary: &Vocabulary, domains: &DomainStore, id: VariableId) -> Vec<String> {
    domains
        .domain(id)
        .iter()
        .map(|&word| vocabulary.word(word).to_string())
        .collect()
}

/// Asserts that every arc of `crossword` is consistent under `domains`.
#[track_caller]
pub fn assert_arc_consistent(crossword: &Crossword, vocabulary: &Vocabulary, domains: &DomainStore) {
    for (x, y) in crossword.overlaps().arcs() {
        let overlap = crossword.overlap(x, y).unwrap();
        for &word in domains.domain(x) {
            let letter = vocabulary.word(word).letter(overlap.offset_a);
            let supported = domains
                .domain(y)
                .iter()
                .any(|&other| vocabulary.word(other).letter(overlap.offset_b) == letter);
            assert!(
                supported,
                "{} in {} has no support in {}",
                vocabulary.word(word),
                crossword.variable(x),
                crossword.variable(y),
            );
        }
    }
}

/// Finds a solution by trying every word in every slot, in slot order.
///
/// Uses no propagation or heuristics, so it is only fit for tiny puzzles.
pub fn brute_force_solve(crossword: &Crossword, vocabulary: &Vocabulary) -> Option<Assignment> {
    fn extend(
        crossword: &Crossword,
        vocabulary: &Vocabulary,
        assignment: &mut Assignment,
        next: usize,
    ) -> bool {
        if next == crossword.variables().len() {
            return true;
        }
        let id = VariableId::new(next);
        for (word, _) in vocabulary.iter() {
            assignment.insert(id, word);
            if assignment.is_consistent(crossword, vocabulary)
                && extend(crossword, vocabulary, assignment, next + 1)
            {
                return true;
            }
            assignment.remove(id);
        }
        false
    }

    let mut assignment = Assignment::new(crossword);
    extend(crossword, vocabulary, &mut assignment, 0).then_some(assignment)
}

/// A test harness that solves one puzzle and checks the result.
///
/// All assertion methods take and return `self`, so checks chain. They panic with
/// the rendered grid on failure and use `#[track_caller]` to report the caller.
#[derive(Debug)]
pub struct PuzzleTester {
    crossword: Crossword,
    vocabulary: Vocabulary,
    solver: CrosswordSolver,
    outcome: Option<(SolveOutcome, SolverStats)>,
}

impl PuzzleTester {
    /// Creates a tester for the given layout and word list.
    ///
    /// # Panics
    ///
    /// Panics if the layout cannot be parsed.
    #[track_caller]
    pub fn new(structure: &str, words: &[&str]) -> Self {
        Self {
            crossword: crossword(structure),
            vocabulary: vocabulary(words),
            solver: CrosswordSolver::new(),
            outcome: None,
        }
    }

    /// Replaces the solver used by [`solve`](Self::solve).
    #[must_use]
    pub fn with_solver(mut self, solver: CrosswordSolver) -> Self {
        self.solver = solver;
        self
    }

    /// Solves the puzzle.
    ///
    /// # Panics
    ///
    /// Panics if the solver returns an error.
    #[track_caller]
    pub fn solve(mut self) -> Self {
        self.outcome = Some(self.solver.solve(&self.crossword, &self.vocabulary).unwrap());
        self
    }

    #[track_caller]
    fn outcome(&self) -> &(SolveOutcome, SolverStats) {
        self.outcome
            .as_ref()
            .expect("call `solve` before asserting on the outcome")
    }

    #[track_caller]
    fn solution(&self) -> &Assignment {
        match &self.outcome().0 {
            SolveOutcome::Solved(assignment) => assignment,
            SolveOutcome::Unsatisfiable(reason) => panic!("expected a solution, got: {reason}"),
        }
    }

    /// Asserts that a complete assignment satisfying every constraint was found.
    #[track_caller]
    pub fn assert_solved(self) -> Self {
        let assignment = self.solution();
        assert!(assignment.is_complete());
        if let Err(err) = assignment.check_consistency(&self.crossword, &self.vocabulary) {
            panic!("inconsistent solution: {err}");
        }
        self
    }

    /// Asserts that the slot starting at `(row, col)` in `direction` holds `word`.
    #[track_caller]
    pub fn assert_word(self, row: usize, col: usize, direction: Direction, word: &str) -> Self {
        let assignment = self.solution();
        let (id, variable) = self
            .crossword
            .variable_ids()
            .map(|id| (id, self.crossword.variable(id)))
            .find(|(_, v)| v.row() == row && v.col() == col && v.direction() == direction)
            .unwrap_or_else(|| panic!("no {direction} slot starts at ({row}, {col})"));
        let actual = assignment
            .get(id)
            .map(|w| self.vocabulary.word(w).to_string());
        assert_eq!(
            actual.as_deref(),
            Some(word),
            "unexpected word in {variable}\n{}",
            assignment.letter_grid(&self.crossword, &self.vocabulary),
        );
        self
    }

    /// Asserts that the filled grid renders as `expected`.
    ///
    /// Leading indentation and blank lines in `expected` are ignored.
    #[track_caller]
    pub fn assert_grid(self, expected: &str) -> Self {
        let assignment = self.solution();
        let rendered = assignment
            .letter_grid(&self.crossword, &self.vocabulary)
            .to_string();
        let expected: String = expected
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| format!("{line}\n"))
            .collect();
        assert_eq!(rendered, expected);
        self
    }

    /// Asserts that the solver proved the puzzle unsatisfiable.
    ///
    /// Also checks the reference solver agrees.
    #[track_caller]
    pub fn assert_no_solution(self) -> Self {
        let (outcome, _) = self.outcome();
        assert!(
            outcome.is_unsatisfiable(),
            "expected no solution, got\n{}",
            self.solution().letter_grid(&self.crossword, &self.vocabulary),
        );
        assert!(brute_force_solve(&self.crossword, &self.vocabulary).is_none());
        self
    }

    /// Asserts that the puzzle failed because the domain of `variable` ran empty.
    #[track_caller]
    pub fn assert_empty_domain(self, variable: Variable) -> Self {
        let expected = self.crossword.id_of(&variable).unwrap();
        match &self.outcome().0 {
            SolveOutcome::Unsatisfiable(Unsatisfiable::EmptyDomain { variable: actual }) => {
                assert_eq!(*actual, expected);
            }
            other => panic!("expected an empty domain for {variable}, got {other:?}"),
        }
        self
    }

    /// Asserts that the search ran out of combinations.
    #[track_caller]
    pub fn assert_search_exhausted(self) -> Self {
        assert_eq!(
            self.outcome().0,
            SolveOutcome::Unsatisfiable(Unsatisfiable::SearchExhausted)
        );
        self
    }

    /// Asserts how many tentative assignments the search undid.
    #[track_caller]
    pub fn assert_backtracks(self, expected: usize) -> Self {
        assert_eq!(self.outcome().1.backtracks(), expected);
        self
    }
}
