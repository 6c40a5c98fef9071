//! Projection of an assignment onto the puzzle grid.

use std::fmt::{self, Display, Write as _};

use crate::{Assignment, Crossword, Position, Vocabulary};

/// Character printed for a blocked cell.
pub const BLOCKED: char = '█';

/// The letters of an assignment laid out cell by cell.
///
/// Blocked cells and fillable cells that no assigned slot covers hold `None`.
/// The [`Display`] form prints one line per row, blocked cells as `█` and empty
/// fillable cells as a space.
///
/// # Examples
///
/// ```
/// use crossword_core::{Assignment, Crossword, Position, VariableId, Vocabulary};
///
/// let crossword = Crossword::new("___\n_##".parse()?);
/// let vocabulary = Vocabulary::new(["AB", "ACE"]);
/// let mut assignment = Assignment::new(&crossword);
/// // Slot 0 runs down from (0, 0), slot 1 across.
/// assignment.insert(VariableId::new(1), vocabulary.id_of("ACE").unwrap());
///
/// let grid = assignment.letter_grid(&crossword, &vocabulary);
/// assert_eq!(grid.get(Position::new(0, 2)), Some('E'));
/// assert_eq!(grid.get(Position::new(1, 0)), None);
/// assert_eq!(grid.to_string(), "ACE\n ██\n");
/// # Ok::<(), crossword_core::LayoutError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    width: usize,
    height: usize,
    fillable: Vec<bool>,
    letters: Vec<Option<char>>,
}

impl LetterGrid {
    /// Places the letters of every assigned word at the cells of its slot.
    #[must_use]
    pub fn new(crossword: &Crossword, vocabulary: &Vocabulary, assignment: &Assignment) -> Self {
        let layout = crossword.layout();
        let (width, height) = (layout.width(), layout.height());
        let fillable = layout.positions().map(|pos| layout.is_fillable(pos)).collect();
        let mut letters = vec![None; width * height];
        for (variable, word) in assignment.entries(crossword, vocabulary) {
            for (pos, &letter) in variable.cells().zip(word.letters()) {
                letters[pos.row() * width + pos.col()] = Some(letter);
            }
        }
        Self {
            width,
            height,
            fillable,
            letters,
        }
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

    /// Returns the letter at `pos`, if any.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<char> {
        if pos.row() >= self.height || pos.col() >= self.width {
            return None;
        }
        self.letters[pos.row() * self.width + pos.col()]
    }

    /// Returns the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.letters.chunks(self.width)
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, letters) in self.rows().enumerate() {
            for (col, letter) in letters.iter().enumerate() {
                let c = match letter {
                    Some(c) => *c,
                    None if self.fillable[row * self.width + col] => ' ',
                    None => BLOCKED,
                };
                f.write_char(c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
