/// Errors that abort a solve.
///
/// Running out of candidates is not an error: it is reported as
/// [`SolveOutcome::Unsatisfiable`](crate::SolveOutcome::Unsatisfiable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// The solve was stopped through its [`CancelFlag`](crate::CancelFlag).
    #[display("solve was cancelled")]
    Cancelled,
}
