use std::sync::Arc;

use portable_atomic::{AtomicBool, Ordering};

/// Shared flag used to stop a running solve.
///
/// The solver polls the flag before each arc revision and at the top of every
/// search step, then returns [`SolverError::Cancelled`](crate::SolverError::Cancelled).
///
/// # Examples
///
/// ```
/// use crossword_core::{Crossword, Vocabulary};
/// use crossword_solver::{CancelFlag, CrosswordSolver, SolverError};
///
/// let flag = CancelFlag::new();
/// let solver = CrosswordSolver::new().with_cancel_flag(flag.clone());
/// flag.cancel();
///
/// let crossword = Crossword::new("___".parse()?);
/// let vocabulary = Vocabulary::new(["CAT"]);
/// assert_eq!(
///     solver.solve(&crossword, &vocabulary).unwrap_err(),
///     SolverError::Cancelled
/// );
/// # Ok::<(), crossword_core::LayoutError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Creates a flag that is not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
