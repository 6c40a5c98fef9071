//! Core data structures for crossword filling.
//!
//! This crate describes a crossword puzzle as the input of a constraint
//! satisfaction problem. It is shared by the solver and the command-line
//! front end.
//!
//! # Overview
//!
//! 1. **Grid model** - The physical puzzle
//!    - [`layout`]: Rectangular occupancy grid of fillable and blocked cells
//!    - [`variable`]: Word slots derived from the layout
//!    - [`overlap`]: Where two slots cross and which letters must agree
//!    - [`crossword`]: The layout, its slots and their crossings bundled together
//!
//! 2. **Words** - What goes into the slots
//!    - [`vocabulary`]: Deduplicated word list addressed by [`WordId`]
//!    - [`assignment`]: A (partial) mapping from slots to words
//!    - [`letter_grid`]: Projection of an assignment back onto the grid
//!
//! # Examples
//!
//! ```
//! use crossword_core::{Crossword, Layout, Vocabulary};
//!
//! let layout: Layout = "
//!     ___
//!     _##
//!     _##
//! "
//! .parse()?;
//! let crossword = Crossword::new(layout);
//! assert_eq!(crossword.variables().len(), 2);
//!
//! let vocabulary: Vocabulary = "cat\ncow\n".parse()?;
//! assert_eq!(vocabulary.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assignment;
pub mod crossword;
pub mod layout;
pub mod letter_grid;
pub mod overlap;
pub mod position;
pub mod variable;
pub mod vocabulary;

pub use self::{
    assignment::{Assignment, ConsistencyError},
    crossword::Crossword,
    layout::{Layout, LayoutError},
    letter_grid::LetterGrid,
    overlap::{Overlap, OverlapIndex},
    position::Position,
    variable::{Direction, Variable, VariableId},
    vocabulary::{Vocabulary, Word, WordId},
};
