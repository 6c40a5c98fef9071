//! A crossword puzzle: layout, slots and crossings.

use std::collections::HashMap;

use crate::{Layout, Overlap, OverlapIndex, Variable, VariableId};

/// The static structure of a puzzle.
///
/// Slots and crossings are derived once from the [`Layout`] and never change. The
/// solver addresses slots by [`VariableId`]; this type translates between ids and
/// [`Variable`] values.
///
/// # Examples
///
/// ```
/// use crossword_core::{Crossword, Direction, Overlap, Variable};
///
/// let crossword = Crossword::new("___\n_##\n_##".parse()?);
/// let across = crossword.id_of(&Variable::new(0, 0, Direction::Across, 3)).unwrap();
/// let down = crossword.id_of(&Variable::new(0, 0, Direction::Down, 3)).unwrap();
/// assert_eq!(crossword.overlap(across, down), Some(Overlap::new(0, 0)));
/// assert_eq!(crossword.neighbors(across), [down]);
/// # Ok::<(), crossword_core::LayoutError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Crossword {
    layout: Layout,
    variables: Vec<Variable>,
    ids: HashMap<Variable, VariableId>,
    overlaps: OverlapIndex,
}

impl Crossword {
    /// Derives the slots and crossings of `layout`.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        let variables = layout.variables();
        let ids = variables
            .iter()
            .enumerate()
            .map(|(i, var)| (*var, VariableId::new(i)))
            .collect();
        let overlaps = OverlapIndex::new(&variables);
        Self {
            layout,
            variables,
            ids,
            overlaps,
        }
    }

    /// Returns the underlying layout.
    #[must_use]
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns every slot, indexed by [`VariableId`].
    #[must_use]
    #[inline]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Returns an iterator over every slot id.
    pub fn variable_ids(&self) -> impl ExactSizeIterator<Item = VariableId> + use<> {
        (0..self.variables.len()).map(VariableId::new)
    }

    /// Returns the slot with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id does not belong to this crossword.
    #[must_use]
    #[inline]
    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id.index()]
    }

    /// Looks up the id of a slot.
    #[must_use]
    pub fn id_of(&self, variable: &Variable) -> Option<VariableId> {
        self.ids.get(variable).copied()
    }

    /// Returns the crossing index.
    #[must_use]
    #[inline]
    pub fn overlaps(&self) -> &OverlapIndex {
        &self.overlaps
    }

    /// Returns where `a` and `b` cross, if they do.
    #[must_use]
    #[inline]
    pub fn overlap(&self, a: VariableId, b: VariableId) -> Option<Overlap> {
        self.overlaps.overlap(a, b)
    }

    /// Returns the slots crossing `id`.
    #[must_use]
    #[inline]
    pub fn neighbors(&self, id: VariableId) -> &[VariableId] {
        self.overlaps.neighbors(id)
    }
}
