use crossword_core::{Assignment, Crossword, VariableId, Vocabulary, WordId};

use crate::{
    CancelFlag, DomainStore, SolverError, SolverStats,
    heuristics::{self, ValueOrder, VariableOrder},
};

/// Depth-first search for a complete, consistent assignment.
///
/// The search owns one [`Assignment`] and extends it in place: a word is inserted
/// when it is consistent with the slots assigned so far and removed again when
/// the branch below it fails. The first complete assignment found is returned.
///
/// Domains are read but never modified. They should already be node and arc
/// consistent, which [`CrosswordSolver`](crate::CrosswordSolver) takes care of.
///
/// # Examples
///
/// ```
/// use crossword_core::{Crossword, Vocabulary};
/// use crossword_solver::{BacktrackSearch, DomainStore, SolverStats};
///
/// let crossword = Crossword::new("___\n_##\n_##".parse()?);
/// let vocabulary = Vocabulary::new(["CAT", "COW"]);
/// let mut domains = DomainStore::new(&crossword, &vocabulary);
/// domains.enforce_node_consistency(&crossword, &vocabulary);
///
/// let search = BacktrackSearch::new(&crossword, &vocabulary, &domains);
/// let assignment = search.run(&mut SolverStats::new())?.unwrap();
/// assert!(assignment.is_complete());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct BacktrackSearch<'a> {
    crossword: &'a Crossword,
    vocabulary: &'a Vocabulary,
    domains: &'a DomainStore,
    variable_order: VariableOrder,
    value_order: ValueOrder,
    cancel: Option<&'a CancelFlag>,
}

impl<'a> BacktrackSearch<'a> {
    /// Creates a search with the default heuristics.
    #[must_use]
    pub fn new(
        crossword: &'a Crossword,
        vocabulary: &'a Vocabulary,
        domains: &'a DomainStore,
    ) -> Self {
        Self {
            crossword,
            vocabulary,
            domains,
            variable_order: VariableOrder::default(),
            value_order: ValueOrder::default(),
            cancel: None,
        }
    }

    /// Sets how the next slot is chosen.
    #[must_use]
    pub fn with_variable_order(mut self, order: VariableOrder) -> Self {
        self.variable_order = order;
        self
    }

    /// Sets how candidate words are ordered.
    #[must_use]
    pub fn with_value_order(mut self, order: ValueOrder) -> Self {
        self.value_order = order;
        self
    }

    /// Makes the search poll `cancel` before every step.
    #[must_use]
    pub fn with_cancel_flag(mut self, cancel: Option<&'a CancelFlag>) -> Self {
        self.cancel = cancel;
        self
    }

    /// Runs the search from an empty assignment.
    ///
    /// Returns `Ok(None)` when every branch fails, meaning the puzzle has no
    /// solution within the given domains.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Cancelled`] if the cancel flag is raised.
    pub fn run(&self, stats: &mut SolverStats) -> Result<Option<Assignment>, SolverError> {
        self.run_from(Assignment::new(self.crossword), stats)
    }

    /// Runs the search extending `assignment`, which must be consistent.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Cancelled`] if the cancel flag is raised.
    pub fn run_from(
        &self,
        mut assignment: Assignment,
        stats: &mut SolverStats,
    ) -> Result<Option<Assignment>, SolverError> {
        if !self.backtrack(&mut assignment, stats)? {
            return Ok(None);
        }
        debug_assert!(assignment.is_complete());
        debug_assert!(assignment.is_consistent(self.crossword, self.vocabulary));
        Ok(Some(assignment))
    }

    fn backtrack(
        &self,
        assignment: &mut Assignment,
        stats: &mut SolverStats,
    ) -> Result<bool, SolverError> {
        if self.cancel.is_some_and(CancelFlag::is_cancelled) {
            return Err(SolverError::Cancelled);
        }
        if assignment.is_complete() {
            return Ok(true);
        }

        let Some(variable) = heuristics::select_unassigned_variable(
            self.variable_order,
            self.crossword,
            self.domains,
            assignment,
        ) else {
            return Ok(true);
        };
        let candidates = heuristics::order_domain_values(
            self.value_order,
            self.crossword,
            self.vocabulary,
            self.domains,
            assignment,
            variable,
        );

        for word in candidates {
            stats.assignments_tried += 1;
            if !self.is_consistent_extension(assignment, variable, word) {
                continue;
            }

            assignment.insert(variable, word);
            log::trace!(
                "depth {}: {} = {}",
                assignment.len(),
                self.crossword.variable(variable),
                self.vocabulary.word(word)
            );
            if self.backtrack(assignment, stats)? {
                return Ok(true);
            }
            assignment.remove(variable);
            stats.backtracks += 1;
        }

        Ok(false)
    }

    /// Checks that assigning `word` to `variable` keeps `assignment` consistent.
    ///
    /// The rest of the assignment is consistent already, so only the constraints
    /// involving `variable` need checking.
    fn is_consistent_extension(
        &self,
        assignment: &Assignment,
        variable: VariableId,
        word: WordId,
    ) -> bool {
        if assignment.contains_word(word) {
            return false;
        }
        let letters = self.vocabulary.word(word);
        if letters.len() != self.crossword.variable(variable).length() {
            return false;
        }
        self.crossword.neighbors(variable).iter().all(|&neighbor| {
            let (Some(other), Some(overlap)) = (
                assignment.get(neighbor),
                self.crossword.overlap(variable, neighbor),
            ) else {
                return true;
            };
            letters.letter(overlap.offset_a) == self.vocabulary.word(other).letter(overlap.offset_b)
        })
    }
}
