//! File handling behind the `crossword` command.
//!
//! A structure file holds one grid row per line, `_` for fillable cells and any
//! other character for blocked ones. A words file holds one word per line; words
//! are uppercased on load. The filled grid is written back as text, one row per
//! line with blocked cells drawn as `█`.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crossword_core::{Crossword, LayoutError, Vocabulary};
use crossword_solver::{CrosswordSolver, SolveOutcome, SolverError, SolverStats};

/// Errors reported by the command line tool.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// A file could not be read.
    #[from(skip)]
    #[display("failed to read {}: {source}", path.display())]
    Read {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The output file could not be written.
    #[from(skip)]
    #[display("failed to write {}: {source}", path.display())]
    Write {
        /// The file being written.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The structure file does not describe a usable grid.
    #[display("invalid structure: {_0}")]
    Layout(#[from] LayoutError),
    /// The solver stopped before finishing.
    #[display("solver failed: {_0}")]
    Solver(#[from] SolverError),
}

/// A crossword together with the words available to fill it.
#[derive(Debug, Clone)]
pub struct Puzzle {
    crossword: Crossword,
    vocabulary: Vocabulary,
}

impl Puzzle {
    /// Builds a puzzle from the contents of a structure file and a words file.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Layout`] if the structure is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossword_cli::Puzzle;
    ///
    /// let puzzle = Puzzle::parse("___\n_##\n_##", "cat\ncow\n")?;
    /// assert_eq!(puzzle.crossword().variables().len(), 2);
    /// assert!(puzzle.vocabulary().id_of("COW").is_some());
    /// # Ok::<(), crossword_cli::CliError>(())
    /// ```
    pub fn parse(structure: &str, words: &str) -> Result<Self, CliError> {
        let crossword = Crossword::new(structure.parse()?);
        let Ok(vocabulary) = words.parse::<Vocabulary>();
        Ok(Self {
            crossword,
            vocabulary,
        })
    }

    /// Reads a puzzle from a structure file and a words file.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Read`] if either file cannot be read and
    /// [`CliError::Layout`] if the structure is malformed.
    pub fn load(structure: &Path, words: &Path) -> Result<Self, CliError> {
        let puzzle = Self::parse(&read_file(structure)?, &read_file(words)?)?;
        log::info!(
            "loaded {} slots from {} and {} words from {}",
            puzzle.crossword.variables().len(),
            structure.display(),
            puzzle.vocabulary.len(),
            words.display(),
        );
        Ok(puzzle)
    }

    /// Returns the grid.
    #[must_use]
    pub fn crossword(&self) -> &Crossword {
        &self.crossword
    }

    /// Returns the words.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Solves the puzzle with `solver`.
    ///
    /// Returns the rendered grid, or `None` if the puzzle has no solution.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Solver`] if the solver stops early.
    pub fn solve(&self, solver: &CrosswordSolver) -> Result<Option<String>, CliError> {
        let (outcome, stats) = solver.solve(&self.crossword, &self.vocabulary)?;
        log_stats(&stats);
        Ok(match outcome {
            SolveOutcome::Solved(assignment) => Some(
                assignment
                    .letter_grid(&self.crossword, &self.vocabulary)
                    .to_string(),
            ),
            SolveOutcome::Unsatisfiable(reason) => {
                log::info!("{reason}");
                None
            }
        })
    }
}

/// Writes a rendered grid to `path`.
///
/// # Errors
///
/// Returns [`CliError::Write`] if the file cannot be written.
pub fn save(path: &Path, grid: &str) -> Result<(), CliError> {
    fs::write(path, grid).map_err(|source| CliError::Write {
        path: path.to_owned(),
        source,
    })
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}

fn log_stats(stats: &SolverStats) {
    log::info!(
        "removed {} words by length and {} by crossings; tried {} words, backtracked {} times",
        stats.node_removals(),
        stats.arc_removals(),
        stats.assignments_tried(),
        stats.backtracks(),
    );
}
