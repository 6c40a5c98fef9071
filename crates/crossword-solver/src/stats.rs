/// Counters collected while solving.
///
/// # Examples
///
/// ```
/// use crossword_core::{Crossword, Vocabulary};
/// use crossword_solver::CrosswordSolver;
///
/// let crossword = Crossword::new("___\n_##\n_##".parse()?);
/// let vocabulary = Vocabulary::new(["CAT", "COW", "TO"]);
///
/// let (_outcome, stats) = CrosswordSolver::new().solve(&crossword, &vocabulary)?;
/// assert_eq!(stats.node_removals(), 2); // "TO" removed from both slots
/// assert!(stats.arc_revisions() > 0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SolverStats {
    pub(crate) node_removals: usize,
    pub(crate) arc_revisions: usize,
    pub(crate) arc_removals: usize,
    pub(crate) assignments_tried: usize,
    pub(crate) backtracks: usize,
}

impl SolverStats {
    /// Creates an empty statistics object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of words removed by node consistency.
    #[must_use]
    pub fn node_removals(&self) -> usize {
        self.node_removals
    }

    /// Returns the number of arcs revised by AC-3.
    #[must_use]
    pub fn arc_revisions(&self) -> usize {
        self.arc_revisions
    }

    /// Returns the number of words removed by AC-3.
    #[must_use]
    pub fn arc_removals(&self) -> usize {
        self.arc_removals
    }

    /// Returns the number of candidate words the search considered.
    #[must_use]
    pub fn assignments_tried(&self) -> usize {
        self.assignments_tried
    }

    /// Returns the number of tentative assignments the search undid.
    #[must_use]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }
}
