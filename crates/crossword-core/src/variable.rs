//! Word slots of a crossword.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

use crate::Position;

/// The direction a word slot runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Direction {
    /// Left to right.
    #[display("across")]
    Across,
    /// Top to bottom.
    #[display("down")]
    Down,
}

impl Direction {
    /// Returns the `(row, col)` step between two consecutive cells of a slot.
    #[must_use]
    #[inline]
    pub const fn step(self) -> (usize, usize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

/// A fillable slot: a maximal run of at least two fillable cells.
///
/// Two variables are equal when their start cell, length and direction all match.
///
/// # Examples
///
/// ```
/// use crossword_core::{Direction, Position, Variable};
///
/// let var = Variable::new(1, 2, Direction::Down, 3);
/// let cells: Vec<_> = var.cells().collect();
/// assert_eq!(
///     cells,
///     [Position::new(1, 2), Position::new(2, 2), Position::new(3, 2)]
/// );
/// assert_eq!(var.offset_of(Position::new(3, 2)), Some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable {
    row: usize,
    col: usize,
    direction: Direction,
    length: usize,
}

impl Variable {
    /// Creates a new variable starting at `(row, col)`.
    #[must_use]
    pub const fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Self {
            row,
            col,
            direction,
            length,
        }
    }

    /// Returns the row of the first cell.
    #[must_use]
    #[inline]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of the first cell.
    #[must_use]
    #[inline]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Returns the direction of the slot.
    #[must_use]
    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the number of cells, which is also the required word length.
    #[must_use]
    #[inline]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns the first cell of the slot.
    #[must_use]
    #[inline]
    pub const fn start(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Returns the cell holding the letter at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is not less than the slot length.
    #[must_use]
    pub fn cell(&self, offset: usize) -> Position {
        assert!(offset < self.length, "offset {offset} out of {self}");
        let (dr, dc) = self.direction.step();
        Position::new(self.row + dr * offset, self.col + dc * offset)
    }

    /// Returns the letter offset of `pos` within this slot, if the slot covers it.
    #[must_use]
    pub fn offset_of(&self, pos: Position) -> Option<usize> {
        let (along, across, start_along, start_across) = match self.direction {
            Direction::Across => (pos.col(), pos.row(), self.col, self.row),
            Direction::Down => (pos.row(), pos.col(), self.row, self.col),
        };
        (across == start_across && along >= start_along && along - start_along < self.length)
            .then(|| along - start_along)
    }

    /// Returns `true` if the slot covers `pos`.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.offset_of(pos).is_some()
    }

    /// Returns an iterator over the cells of the slot, in letter order.
    #[must_use]
    pub fn cells(&self) -> Cells {
        Cells {
            variable: *self,
            front: 0,
            back: self.length,
        }
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} : {}",
            self.row, self.col, self.direction, self.length
        )
    }
}

/// Iterator over the cells of a [`Variable`].
#[derive(Debug, Clone)]
pub struct Cells {
    variable: Variable,
    front: usize,
    back: usize,
}

impl Iterator for Cells {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let pos = self.variable.cell(self.front);
        self.front += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Cells {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.variable.cell(self.back))
    }
}

impl ExactSizeIterator for Cells {}
impl FusedIterator for Cells {}

/// Dense index of a [`Variable`] within a [`Crossword`](crate::Crossword).
///
/// Ids follow the order in which [`Layout::variables`](crate::Layout::variables)
/// derives the slots, which is also the final tie-break order of the solver.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("#{_0}")]
pub struct VariableId(usize);

impl VariableId {
    /// Creates an id from its raw index.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_across() {
        let var = Variable::new(0, 1, Direction::Across, 3);
        let cells: Vec<_> = var.cells().collect();
        assert_eq!(
            cells,
            [Position::new(0, 1), Position::new(0, 2), Position::new(0, 3)]
        );
        assert_eq!(var.cells().len(), 3);
    }

    #[test]
    fn test_cells_reversed() {
        let var = Variable::new(2, 0, Direction::Down, 2);
        let cells: Vec<_> = var.cells().rev().collect();
        assert_eq!(cells, [Position::new(3, 0), Position::new(2, 0)]);
    }

    #[test]
    fn test_offset_of() {
        let var = Variable::new(1, 1, Direction::Across, 4);
        assert_eq!(var.offset_of(Position::new(1, 1)), Some(0));
        assert_eq!(var.offset_of(Position::new(1, 4)), Some(3));
        assert_eq!(var.offset_of(Position::new(1, 5)), None);
        assert_eq!(var.offset_of(Position::new(1, 0)), None);
        assert_eq!(var.offset_of(Position::new(0, 2)), None);
    }

    #[test]
    fn test_offset_of_matches_cell() {
        let var = Variable::new(3, 2, Direction::Down, 5);
        for (i, pos) in var.cells().enumerate() {
            assert_eq!(var.offset_of(pos), Some(i));
            assert!(var.contains(pos));
        }
    }

    #[test]
    fn test_equality_by_value() {
        let a = Variable::new(0, 0, Direction::Across, 3);
        assert_eq!(a, Variable::new(0, 0, Direction::Across, 3));
        assert_ne!(a, Variable::new(0, 0, Direction::Down, 3));
        assert_ne!(a, Variable::new(0, 0, Direction::Across, 4));
    }

    #[test]
    fn test_display() {
        let var = Variable::new(0, 1, Direction::Down, 5);
        assert_eq!(var.to_string(), "(0, 1) down : 5");
        assert_eq!(VariableId::new(3).to_string(), "#3");
    }

    #[test]
    #[should_panic(expected = "out of")]
    fn test_cell_out_of_range() {
        let var = Variable::new(0, 0, Direction::Across, 2);
        let _ = var.cell(2);
    }
}
