//! Crossings between word slots.
//!
//! Two slots overlap when they share exactly one cell. The letters placed there by
//! both slots must agree, which is the only binary constraint of a crossword besides
//! word uniqueness.

use tinyvec::TinyVec;

use crate::{Variable, VariableId};

/// Letter offsets of a shared cell, seen from an ordered pair of slots `(a, b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Overlap {
    /// Index of the shared cell within the word of `a`.
    pub offset_a: usize,
    /// Index of the shared cell within the word of `b`.
    pub offset_b: usize,
}

impl Overlap {
    /// Creates a new overlap.
    #[must_use]
    #[inline]
    pub const fn new(offset_a: usize, offset_b: usize) -> Self {
        Self { offset_a, offset_b }
    }

    /// Returns the same overlap seen from `(b, a)`.
    #[must_use]
    #[inline]
    pub const fn reversed(self) -> Self {
        Self::new(self.offset_b, self.offset_a)
    }

    /// Computes where `a` and `b` cross, if they cross at exactly one cell.
    ///
    /// Parallel slots that share several cells cannot come from a valid layout and
    /// are reported as not overlapping.
    #[must_use]
    pub fn between(a: &Variable, b: &Variable) -> Option<Self> {
        if a == b {
            return None;
        }
        let mut shared = a
            .cells()
            .enumerate()
            .filter_map(|(offset_a, pos)| Some(Self::new(offset_a, b.offset_of(pos)?)));
        let overlap = shared.next()?;
        shared.next().is_none().then_some(overlap)
    }
}

/// Neighbor list of one slot.
pub type Neighbors = TinyVec<[VariableId; 8]>;

/// Precomputed crossings of every pair of slots.
///
/// The table is built once and never changes. For every pair the invariant
/// `overlap(a, b) == overlap(b, a).map(Overlap::reversed)` holds.
///
/// # Examples
///
/// ```
/// use crossword_core::{Direction, Overlap, OverlapIndex, Variable, VariableId};
///
/// let variables = [
///     Variable::new(0, 0, Direction::Across, 3),
///     Variable::new(0, 2, Direction::Down, 4),
/// ];
/// let index = OverlapIndex::new(&variables);
/// let (a, b) = (VariableId::new(0), VariableId::new(1));
///
/// assert_eq!(index.overlap(a, b), Some(Overlap::new(2, 0)));
/// assert_eq!(index.overlap(b, a), Some(Overlap::new(0, 2)));
/// assert_eq!(index.neighbors(a), [b]);
/// ```
#[derive(Debug, Clone)]
pub struct OverlapIndex {
    len: usize,
    table: Vec<Option<Overlap>>,
    neighbors: Vec<Neighbors>,
}

impl OverlapIndex {
    /// Computes the crossings of `variables`, addressed by their position in the slice.
    #[must_use]
    pub fn new(variables: &[Variable]) -> Self {
        let len = variables.len();
        let mut table = vec![None; len * len];
        let mut neighbors = vec![Neighbors::default(); len];

        for (i, a) in variables.iter().enumerate() {
            for (j, b) in variables.iter().enumerate().skip(i + 1) {
                let Some(overlap) = Overlap::between(a, b) else {
                    continue;
                };
                table[i * len + j] = Some(overlap);
                table[j * len + i] = Some(overlap.reversed());
                neighbors[i].push(VariableId::new(j));
                neighbors[j].push(VariableId::new(i));
            }
        }
        for list in &mut neighbors {
            list.sort_unstable();
        }

        Self {
            len,
            table,
            neighbors,
        }
    }

    /// Returns the number of indexed slots.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slot is indexed.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the crossing of `a` and `b`, or `None` if they do not cross.
    ///
    /// # Panics
    ///
    /// Panics if either id is out of range.
    #[must_use]
    #[inline]
    pub fn overlap(&self, a: VariableId, b: VariableId) -> Option<Overlap> {
        assert!(a.index() < self.len && b.index() < self.len);
        self.table[a.index() * self.len + b.index()]
    }

    /// Returns the slots crossing `a`, sorted by id.
    #[must_use]
    #[inline]
    pub fn neighbors(&self, a: VariableId) -> &[VariableId] {
        &self.neighbors[a.index()]
    }

    /// Returns the number of slots crossing `a`.
    #[must_use]
    #[inline]
    pub fn degree(&self, a: VariableId) -> usize {
        self.neighbors[a.index()].len()
    }

    /// Returns an iterator over every ordered pair of crossing slots.
    pub fn arcs(&self) -> impl Iterator<Item = (VariableId, VariableId)> + '_ {
        self.neighbors
            .iter()
            .enumerate()
            .flat_map(|(i, list)| list.iter().map(move |&j| (VariableId::new(i), j)))
    }
}
