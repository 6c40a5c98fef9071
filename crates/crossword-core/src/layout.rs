//! Physical layout of a crossword grid.
//!
//! A [`Layout`] records which cells accept a letter. The text structure format
//! has one line per row, with `_` marking a fillable cell and any other
//! character marking a blocked one. Whitespace around rows and blank lines
//! are ignored:
//!
//! ```text
//! #___#
//! #_##_
//! #_##_
//! #_##_
//! #____
//! ```

use std::str::FromStr;

use crate::{Direction, Position, Variable};

/// Character marking a fillable cell in the text structure format.
pub const FILLABLE: char = '_';

/// Errors raised for a malformed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LayoutError {
    /// The layout has no rows or no columns.
    #[display("layout is empty")]
    Empty,
    /// A row has a different width than the first one.
    #[display("row {row} has {found} cells, expected {expected}")]
    NotRectangular {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// No cell of the layout can hold a letter.
    #[display("layout has no fillable cells")]
    NoFillableCells,
}

/// Rectangular occupancy grid.
///
/// # Examples
///
/// ```
/// use crossword_core::{Direction, Layout, Position, Variable};
///
/// let layout: Layout = "
///     ___
///     #_#
/// "
/// .parse()?;
/// assert_eq!((layout.height(), layout.width()), (2, 3));
/// assert!(layout.is_fillable(Position::new(1, 1)));
/// assert_eq!(
///     layout.variables(),
///     [
///         Variable::new(0, 0, Direction::Across, 3),
///         Variable::new(0, 1, Direction::Down, 2),
///     ]
/// );
/// # Ok::<(), crossword_core::LayoutError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Layout {
    /// Builds a layout from rows of cells, `true` meaning fillable.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Empty`] if there are no rows or the rows are empty,
    /// [`LayoutError::NotRectangular`] if the rows differ in width, and
    /// [`LayoutError::NoFillableCells`] if every cell is blocked.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, LayoutError>
    where
        R: AsRef<[bool]>,
    {
        let mut width = None;
        let mut height = 0;
        let mut cells = vec![];
        for (row, cells_in_row) in rows.into_iter().enumerate() {
            let cells_in_row = cells_in_row.as_ref();
            let expected = *width.get_or_insert(cells_in_row.len());
            if cells_in_row.len() != expected {
                return Err(LayoutError::NotRectangular {
                    row,
                    expected,
                    found: cells_in_row.len(),
                });
            }
            cells.extend_from_slice(cells_in_row);
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 {
            return Err(LayoutError::Empty);
        }
        if !cells.contains(&true) {
            return Err(LayoutError::NoFillableCells);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if `pos` is inside the grid and can hold a letter.
    #[must_use]
    pub fn is_fillable(&self, pos: Position) -> bool {
        pos.row() < self.height && pos.col() < self.width && self.cells[self.offset(pos)]
    }

    /// Returns an iterator over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Position::new(row, col)))
    }

    /// Derives every word slot of the layout.
    ///
    /// Cells are scanned in row-major order. A cell starts a slot in a direction
    /// when it is fillable, the previous cell in that direction is not, and the run
    /// it opens is at least two cells long. When one cell starts both a down and an
    /// across slot, the down slot comes first.
    #[must_use]
    pub fn variables(&self) -> Vec<Variable> {
        let mut variables = vec![];
        for pos in self.positions() {
            for direction in [Direction::Down, Direction::Across] {
                if let Some(length) = self.run_starting_at(pos, direction) {
                    variables.push(Variable::new(pos.row(), pos.col(), direction, length));
                }
            }
        }
        variables
    }

    fn run_starting_at(&self, pos: Position, direction: Direction) -> Option<usize> {
        if !self.is_fillable(pos) {
            return None;
        }
        let (dr, dc) = direction.step();
        if pos.row() >= dr
            && pos.col() >= dc
            && self.is_fillable(Position::new(pos.row() - dr, pos.col() - dc))
        {
            return None;
        }
        let length = (0..)
            .map(|k| Position::new(pos.row() + dr * k, pos.col() + dc * k))
            .take_while(|&cell| self.is_fillable(cell))
            .count();
        (length >= 2).then_some(length)
    }

    fn offset(&self, pos: Position) -> usize {
        pos.row() * self.width + pos.col()
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<bool>> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(|c| c == FILLABLE).collect())
            .collect();
        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const STRUCTURE: &str = "
        #___#
        #_##_
        #_##_
        #_##_
        #____
    ";

    #[test]
    fn test_parse_structure() {
        let layout: Layout = STRUCTURE.parse().unwrap();
        assert_eq!(layout.width(), 5);
        assert_eq!(layout.height(), 5);
        assert!(!layout.is_fillable(Position::new(0, 0)));
        assert!(layout.is_fillable(Position::new(0, 1)));
        assert!(layout.is_fillable(Position::new(4, 4)));
        assert!(!layout.is_fillable(Position::new(5, 0)));
        assert!(!layout.is_fillable(Position::new(0, 5)));
    }

    #[test]
    fn test_variables_of_structure() {
        let layout: Layout = STRUCTURE.parse().unwrap();
        assert_eq!(
            layout.variables(),
            [
                Variable::new(0, 1, Direction::Down, 5),
                Variable::new(0, 1, Direction::Across, 3),
                Variable::new(1, 4, Direction::Down, 4),
                Variable::new(4, 1, Direction::Across, 4),
            ]
        );
    }

    #[test]
    fn test_single_cells_are_not_variables() {
        let layout: Layout = "
            _#_
            ###
            _#_
        "
        .parse()
        .unwrap();
        assert!(layout.variables().is_empty());
    }

    #[test]
    fn test_run_split_by_block() {
        let layout = Layout::from_rows([[true, true, false, true, true, true]]).unwrap();
        assert_eq!(
            layout.variables(),
            [
                Variable::new(0, 0, Direction::Across, 2),
                Variable::new(0, 3, Direction::Across, 3),
            ]
        );
    }

    #[test]
    fn test_not_rectangular() {
        let err = "___\n__\n".parse::<Layout>().unwrap_err();
        assert_eq!(
            err,
            LayoutError::NotRectangular {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!("".parse::<Layout>().unwrap_err(), LayoutError::Empty);
        let rows: [[bool; 0]; 2] = [[], []];
        assert_eq!(Layout::from_rows(rows).unwrap_err(), LayoutError::Empty);
    }

    #[test]
    fn test_no_fillable_cells() {
        assert_eq!(
            "##\n##\n".parse::<Layout>().unwrap_err(),
            LayoutError::NoFillableCells
        );
    }

    #[test]
    fn test_positions_row_major() {
        let layout = Layout::from_rows([[true, false], [false, true]]).unwrap();
        let positions: Vec<_> = layout.positions().collect();
        assert_eq!(
            positions,
            [
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_variables_cover_every_run(
            rows in (1usize..6, 1usize..6)
                .prop_flat_map(|(h, w)| prop::collection::vec(prop::collection::vec(any::<bool>(), w), h))
        ) {
            prop_assume!(rows.iter().flatten().any(|&c| c));
            let layout = Layout::from_rows(&rows).unwrap();
            let variables = layout.variables();

            for variable in &variables {
                prop_assert!(variable.length() >= 2);
                prop_assert!(variable.cells().all(|pos| layout.is_fillable(pos)));
                let (dr, dc) = variable.direction().step();
                let end = variable.cell(variable.length() - 1);
                let after = Position::new(end.row() + dr, end.col() + dc);
                prop_assert!(!layout.is_fillable(after));
            }

            // Every cell with a fillable neighbor along a direction lies in exactly
            // one slot of that direction.
            for pos in layout.positions().filter(|&pos| layout.is_fillable(pos)) {
                for direction in [Direction::Down, Direction::Across] {
                    let (dr, dc) = direction.step();
                    let next = layout.is_fillable(Position::new(pos.row() + dr, pos.col() + dc));
                    let prev = pos.row() >= dr
                        && pos.col() >= dc
                        && layout.is_fillable(Position::new(pos.row() - dr, pos.col() - dc));
                    let covering = variables
                        .iter()
                        .filter(|v| v.direction() == direction && v.contains(pos))
                        .count();
                    prop_assert_eq!(covering, usize::from(next || prev));
                }
            }
        }
    }
}
