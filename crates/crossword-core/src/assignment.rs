//! Mapping from slots to chosen words.

use std::collections::HashSet;

use crate::{Crossword, LetterGrid, Variable, VariableId, Vocabulary, Word, WordId};

/// Ways an assignment can violate the puzzle constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConsistencyError {
    /// The same word fills two slots.
    #[display("word {word} is used more than once")]
    DuplicateWord {
        /// The repeated word.
        word: WordId,
    },
    /// A word does not fit the length of its slot.
    #[display("word {word} does not fit the length of {variable}")]
    LengthMismatch {
        /// The slot.
        variable: VariableId,
        /// The word assigned to it.
        word: WordId,
    },
    /// Two crossing slots disagree on their shared letter.
    #[display("{a} and {b} disagree at their crossing")]
    LetterMismatch {
        /// The first slot.
        a: VariableId,
        /// The second slot.
        b: VariableId,
    },
}

/// A partial or complete assignment of words to slots.
///
/// The assignment only records choices; whether they satisfy the puzzle is
/// checked explicitly with [`check_consistency`](Self::check_consistency).
///
/// # Examples
///
/// ```
/// use crossword_core::{Assignment, Crossword, Vocabulary};
///
/// let crossword = Crossword::new("___\n_##\n_##".parse()?);
/// let vocabulary = Vocabulary::new(["CAT", "COW"]);
/// let [down, across] = [0, 1].map(crossword_core::VariableId::new);
///
/// let mut assignment = Assignment::new(&crossword);
/// assignment.insert(down, vocabulary.id_of("COW").unwrap());
/// assignment.insert(across, vocabulary.id_of("CAT").unwrap());
///
/// assert!(assignment.is_complete());
/// assert!(assignment.is_consistent(&crossword, &vocabulary));
/// # Ok::<(), crossword_core::LayoutError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    slots: Vec<Option<WordId>>,
    assigned: usize,
}

impl Assignment {
    /// Creates an empty assignment for the slots of `crossword`.
    #[must_use]
    pub fn new(crossword: &Crossword) -> Self {
        Self::with_len(crossword.variables().len())
    }

    /// Creates an empty assignment for `len` slots.
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self {
            slots: vec![None; len],
            assigned: 0,
        }
    }

    /// Assigns `word` to `id`, returning the previously assigned word.
    pub fn insert(&mut self, id: VariableId, word: WordId) -> Option<WordId> {
        let previous = self.slots[id.index()].replace(word);
        if previous.is_none() {
            self.assigned += 1;
        }
        previous
    }

    /// Clears the slot `id`, returning the word it held.
    pub fn remove(&mut self, id: VariableId) -> Option<WordId> {
        let previous = self.slots[id.index()].take();
        if previous.is_some() {
            self.assigned -= 1;
        }
        previous
    }

    /// Returns the word assigned to `id`.
    #[must_use]
    #[inline]
    pub fn get(&self, id: VariableId) -> Option<WordId> {
        self.slots[id.index()]
    }

    /// Returns `true` if `id` has a word.
    #[must_use]
    #[inline]
    pub fn is_assigned(&self, id: VariableId) -> bool {
        self.slots[id.index()].is_some()
    }

    /// Returns the number of assigned slots.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.assigned
    }

    /// Returns `true` if no slot is assigned.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assigned == 0
    }

    /// Returns `true` if every slot is assigned.
    #[must_use]
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.assigned == self.slots.len()
    }

    /// Returns `true` if any slot holds `word`.
    #[must_use]
    pub fn contains_word(&self, word: WordId) -> bool {
        self.slots.contains(&Some(word))
    }

    /// Returns an iterator over the assigned slots and their words, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, WordId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, word)| Some((VariableId::new(i), (*word)?)))
    }

    /// Returns an iterator over the assigned slots and their words as values.
    pub fn entries<'a>(
        &'a self,
        crossword: &'a Crossword,
        vocabulary: &'a Vocabulary,
    ) -> impl Iterator<Item = (&'a Variable, &'a Word)> + 'a {
        self.iter()
            .map(|(id, word)| (crossword.variable(id), vocabulary.word(word)))
    }

    /// Returns the word assigned to `variable`.
    #[must_use]
    pub fn word_for<'a>(
        &self,
        crossword: &Crossword,
        vocabulary: &'a Vocabulary,
        variable: &Variable,
    ) -> Option<&'a Word> {
        let word = self.get(crossword.id_of(variable)?)?;
        Some(vocabulary.word(word))
    }

    /// Checks every constraint among the assigned slots.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: a word used twice, a word whose length
    /// differs from its slot, or two crossing slots disagreeing on a letter.
    pub fn check_consistency(
        &self,
        crossword: &Crossword,
        vocabulary: &Vocabulary,
    ) -> Result<(), ConsistencyError> {
        let mut seen = HashSet::with_capacity(self.assigned);
        for (id, word) in self.iter() {
            if !seen.insert(word) {
                return Err(ConsistencyError::DuplicateWord { word });
            }
            let letters = vocabulary.word(word);
            if letters.len() != crossword.variable(id).length() {
                return Err(ConsistencyError::LengthMismatch { variable: id, word });
            }
            for &neighbor in crossword.neighbors(id) {
                let Some(other) = self.get(neighbor) else {
                    continue;
                };
                let Some(overlap) = crossword.overlap(id, neighbor) else {
                    continue;
                };
                let other = vocabulary.word(other);
                if other.len() <= overlap.offset_b
                    || letters.letter(overlap.offset_a) != other.letter(overlap.offset_b)
                {
                    return Err(ConsistencyError::LetterMismatch { a: id, b: neighbor });
                }
            }
        }
        Ok(())
    }

    /// Returns `true` if [`check_consistency`](Self::check_consistency) succeeds.
    #[must_use]
    pub fn is_consistent(&self, crossword: &Crossword, vocabulary: &Vocabulary) -> bool {
        self.check_consistency(crossword, vocabulary).is_ok()
    }

    /// Projects the assignment onto the grid.
    #[must_use]
    pub fn letter_grid(&self, crossword: &Crossword, vocabulary: &Vocabulary) -> LetterGrid {
        LetterGrid::new(crossword, vocabulary, self)
    }
}
