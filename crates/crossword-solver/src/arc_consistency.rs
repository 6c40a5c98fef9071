//! Arc consistency (AC-3) over crossing slots.
//!
//! An arc `(x, y)` is consistent when every candidate of `x` has at least one
//! candidate of `y` placing the same letter in their shared cell. [`ac3`] revises
//! arcs from a FIFO worklist until none changes or a domain runs empty.
//!
//! Arc consistency only looks at pairs of slots. A consistent result still may
//! have no solution; the search decides that.

use std::collections::VecDeque;

use crossword_core::{Crossword, VariableId, Vocabulary};

use crate::{CancelFlag, DomainStore, SolverError, SolverStats};

/// Result of [`ac3`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ArcConsistency {
    /// Every arc is consistent and no domain is empty.
    Consistent,
    /// The domain of `variable` ran empty, so the puzzle has no solution.
    Wipeout {
        /// The slot whose domain was emptied.
        variable: VariableId,
    },
}

/// Makes `x` arc consistent with `y`.
///
/// Removes every candidate of `x` whose letter at the shared cell appears in no
/// candidate of `y`. Returns the number of removed words, so a non-zero result
/// means the domain of `x` was revised. Slots that do not cross are left alone.
///
/// # Examples
///
/// ```
/// use crossword_core::{Crossword, VariableId, Vocabulary};
/// use crossword_solver::{DomainStore, arc_consistency};
///
/// let crossword = Crossword::new("___\n_##\n_##".parse()?);
/// let vocabulary = Vocabulary::new(["CAT", "DOG"]);
/// let [down, across] = [0, 1].map(VariableId::new);
///
/// let mut domains = DomainStore::new(&crossword, &vocabulary);
/// domains.retain(across, |w| w == vocabulary.id_of("CAT").unwrap());
///
/// let removed = arc_consistency::revise(&crossword, &vocabulary, &mut domains, down, across);
/// assert_eq!(removed, 1);
/// assert_eq!(domains.domain(down), [vocabulary.id_of("CAT").unwrap()]);
/// # Ok::<(), crossword_core::LayoutError>(())
/// ```
pub fn revise(
    crossword: &Crossword,
    vocabulary: &Vocabulary,
    domains: &mut DomainStore,
    x: VariableId,
    y: VariableId,
) -> usize {
    let Some(overlap) = crossword.overlap(x, y) else {
        return 0;
    };
    let supported = domains.letters_at(vocabulary, y, overlap.offset_b);
    domains.retain(x, |word| {
        let word = vocabulary.word(word);
        overlap.offset_a < word.len() && supported.contains(&word.letter(overlap.offset_a))
    })
}

/// Runs AC-3 starting from every arc of the puzzle.
///
/// # Errors
///
/// Returns [`SolverError::Cancelled`] if `cancel` is raised while running.
pub fn ac3(
    crossword: &Crossword,
    vocabulary: &Vocabulary,
    domains: &mut DomainStore,
    cancel: Option<&CancelFlag>,
    stats: &mut SolverStats,
) -> Result<ArcConsistency, SolverError> {
    let arcs = crossword.overlaps().arcs();
    ac3_with_arcs(crossword, vocabulary, domains, arcs, cancel, stats)
}

/// Runs AC-3 starting from the given arcs.
///
/// Whenever revising `(x, y)` shrinks `x`, every arc `(z, x)` with `z` a neighbor
/// of `x` other than `y` is queued again. Stops at the first emptied domain.
///
/// # Errors
///
/// Returns [`SolverError::Cancelled`] if `cancel` is raised while running.
pub fn ac3_with_arcs<I>(
    crossword: &Crossword,
    vocabulary: &Vocabulary,
    domains: &mut DomainStore,
    arcs: I,
    cancel: Option<&CancelFlag>,
    stats: &mut SolverStats,
) -> Result<ArcConsistency, SolverError>
where
    I: IntoIterator<Item = (VariableId, VariableId)>,
{
    let mut queue = ArcQueue::new(domains.variable_count());
    for (x, y) in arcs {
        queue.push(x, y);
    }

    while let Some((x, y)) = queue.pop() {
        if cancel.is_some_and(CancelFlag::is_cancelled) {
            return Err(SolverError::Cancelled);
        }

        stats.arc_revisions += 1;
        let removed = revise(crossword, vocabulary, domains, x, y);
        if removed == 0 {
            continue;
        }
        stats.arc_removals += removed;
        log::trace!("revised {x} against {y}: removed {removed} words");

        if domains.is_empty(x) {
            log::debug!(
                "domain of {} emptied by arc consistency",
                crossword.variable(x)
            );
            return Ok(ArcConsistency::Wipeout { variable: x });
        }
        for &z in crossword.neighbors(x) {
            if z != y {
                queue.push(z, x);
            }
        }
    }

    Ok(ArcConsistency::Consistent)
}

/// FIFO worklist of arcs that holds each arc at most once.
#[derive(Debug)]
struct ArcQueue {
    len: usize,
    queued: Vec<bool>,
    arcs: VecDeque<(VariableId, VariableId)>,
}

impl ArcQueue {
    fn new(len: usize) -> Self {
        Self {
            len,
            queued: vec![false; len * len],
            arcs: VecDeque::new(),
        }
    }

    fn push(&mut self, x: VariableId, y: VariableId) {
        let slot = &mut self.queued[x.index() * self.len + y.index()];
        if !*slot {
            *slot = true;
            self.arcs.push_back((x, y));
        }
    }

    fn pop(&mut self) -> Option<(VariableId, VariableId)> {
        let (x, y) = self.arcs.pop_front()?;
        self.queued[x.index() * self.len + y.index()] = false;
        Some((x, y))
    }
}
