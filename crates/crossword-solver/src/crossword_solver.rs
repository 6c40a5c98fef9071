use crossword_core::{Assignment, Crossword, VariableId, Vocabulary};

use crate::{
    ArcConsistency, BacktrackSearch, CancelFlag, DomainStore, SolverError, SolverStats,
    arc_consistency,
    heuristics::{ValueOrder, VariableOrder},
};

/// Why a puzzle has no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Unsatisfiable {
    /// No word can fill `variable`, found before searching.
    #[display("no word fits slot {variable}")]
    EmptyDomain {
        /// The slot left without candidates.
        variable: VariableId,
    },
    /// The search tried every combination of candidates.
    #[display("no combination of words fills every slot")]
    SearchExhausted,
}

/// Result of a completed solve.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveOutcome {
    /// A complete assignment satisfying every constraint.
    Solved(Assignment),
    /// The puzzle has no solution.
    Unsatisfiable(Unsatisfiable),
}

impl SolveOutcome {
    /// Returns the solution, if one was found.
    #[must_use]
    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            Self::Solved(assignment) => Some(assignment),
            Self::Unsatisfiable(_) => None,
        }
    }

    /// Consumes the outcome and returns the solution, if one was found.
    #[must_use]
    pub fn into_assignment(self) -> Option<Assignment> {
        match self {
            Self::Solved(assignment) => Some(assignment),
            Self::Unsatisfiable(_) => None,
        }
    }
}

/// Fills a crossword by propagation followed by backtracking search.
///
/// Each call to [`solve`](Self::solve) works on its own [`DomainStore`], so one
/// solver can be reused for any number of puzzles.
///
/// # Examples
///
/// ```
/// use crossword_core::{Crossword, Vocabulary};
/// use crossword_solver::{CrosswordSolver, ValueOrder, VariableOrder};
///
/// let crossword = Crossword::new(
///     "#___#\n#_##_\n#_##_\n#_##_\n#____".parse()?,
/// );
/// let vocabulary: Vocabulary = "one\ntwo\nthree\nfour\nfive\nsix\nseven\neight\nnine\nten".parse()?;
///
/// let solver = CrosswordSolver::new()
///     .with_variable_order(VariableOrder::InputOrder)
///     .with_value_order(ValueOrder::DomainOrder);
/// let (outcome, stats) = solver.solve(&crossword, &vocabulary)?;
///
/// let assignment = outcome.assignment().unwrap();
/// assert_eq!(
///     assignment.letter_grid(&crossword, &vocabulary).to_string(),
///     "█SIX█\n█E██F\n█V██I\n█E██V\n█NINE\n",
/// );
/// println!("{} backtracks", stats.backtracks());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct CrosswordSolver {
    variable_order: VariableOrder,
    value_order: ValueOrder,
    cancel: Option<CancelFlag>,
}

impl CrosswordSolver {
    /// Creates a solver with the default heuristics and no cancel flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how the search picks the next slot.
    #[must_use]
    pub fn with_variable_order(mut self, order: VariableOrder) -> Self {
        self.variable_order = order;
        self
    }

    /// Sets how the search orders candidate words.
    #[must_use]
    pub fn with_value_order(mut self, order: ValueOrder) -> Self {
        self.value_order = order;
        self
    }

    /// Makes the solver stop with [`SolverError::Cancelled`] once `flag` is raised.
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Returns the slot ordering heuristic.
    #[must_use]
    pub fn variable_order(&self) -> VariableOrder {
        self.variable_order
    }

    /// Returns the word ordering heuristic.
    #[must_use]
    pub fn value_order(&self) -> ValueOrder {
        self.value_order
    }

    /// Solves the puzzle and returns the outcome with fresh statistics.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Cancelled`] if the cancel flag is raised.
    pub fn solve(
        &self,
        crossword: &Crossword,
        vocabulary: &Vocabulary,
    ) -> Result<(SolveOutcome, SolverStats), SolverError> {
        let mut stats = SolverStats::new();
        let outcome = self.solve_with_stats(crossword, vocabulary, &mut stats)?;
        Ok((outcome, stats))
    }

    /// Solves the puzzle, adding counters to `stats`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Cancelled`] if the cancel flag is raised.
    pub fn solve_with_stats(
        &self,
        crossword: &Crossword,
        vocabulary: &Vocabulary,
        stats: &mut SolverStats,
    ) -> Result<SolveOutcome, SolverError> {
        let cancel = self.cancel.as_ref();
        let mut domains = DomainStore::new(crossword, vocabulary);

        let removed = domains.enforce_node_consistency(crossword, vocabulary);
        stats.node_removals += removed;
        log::debug!(
            "node consistency removed {removed} words across {} slots",
            crossword.variables().len()
        );
        if let Some(variable) = crossword.variable_ids().find(|&id| domains.is_empty(id)) {
            log::debug!("no word fits {}", crossword.variable(variable));
            return Ok(SolveOutcome::Unsatisfiable(Unsatisfiable::EmptyDomain {
                variable,
            }));
        }

        let revisions_before = stats.arc_revisions;
        let consistency = arc_consistency::ac3(crossword, vocabulary, &mut domains, cancel, stats)?;
        log::debug!(
            "arc consistency revised {} arcs, {} words left",
            stats.arc_revisions - revisions_before,
            crossword.variable_ids().map(|id| domains.len(id)).sum::<usize>()
        );
        if let ArcConsistency::Wipeout { variable } = consistency {
            return Ok(SolveOutcome::Unsatisfiable(Unsatisfiable::EmptyDomain {
                variable,
            }));
        }

        let found = BacktrackSearch::new(crossword, vocabulary, &domains)
            .with_variable_order(self.variable_order)
            .with_value_order(self.value_order)
            .with_cancel_flag(cancel)
            .run(stats)?;
        log::debug!(
            "search tried {} words with {} backtracks",
            stats.assignments_tried,
            stats.backtracks
        );

        Ok(match found {
            Some(assignment) => SolveOutcome::Solved(assignment),
            None => SolveOutcome::Unsatisfiable(Unsatisfiable::SearchExhausted),
        })
    }
}
