//! Candidate words.
//!
//! A [`Vocabulary`] is a deduplicated, sorted list of [`Word`]s. The solver keeps
//! domains as lists of [`WordId`]s into it, so the words themselves are stored once.

use std::{
    collections::BTreeSet,
    convert::Infallible,
    fmt::{self, Display, Write as _},
    str::FromStr,
};

/// A candidate word, stored letter by letter so that any letter is one index away.
///
/// # Examples
///
/// ```
/// use crossword_core::Word;
///
/// let word = Word::new("SEVEN");
/// assert_eq!(word.len(), 5);
/// assert_eq!(word.letter(2), 'V');
/// assert_eq!(word.to_string(), "SEVEN");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(Box<[char]>);

impl Word {
    /// Creates a word from its text.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self(text.chars().collect())
    }

    /// Returns the number of letters.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the word has no letters.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the letter at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is out of range.
    #[must_use]
    #[inline]
    pub fn letter(&self, offset: usize) -> char {
        self.0[offset]
    }

    /// Returns all letters.
    #[must_use]
    #[inline]
    pub fn letters(&self) -> &[char] {
        &self.0
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|&c| f.write_char(c))
    }
}

/// Index of a [`Word`] within a [`Vocabulary`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("w{_0}")]
pub struct WordId(usize);

impl WordId {
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

/// Deduplicated word list.
///
/// Words are kept in sorted order, so [`WordId`]s grow alphabetically. Empty words
/// are dropped since no slot can hold them.
///
/// Parsing from text reads one word per line, ignores blank lines and upper-cases
/// every word. [`Vocabulary::new`] takes words as given.
///
/// # Examples
///
/// ```
/// use crossword_core::Vocabulary;
///
/// let vocabulary: Vocabulary = "dog\ncat\n\nDog\n".parse().unwrap();
/// let words: Vec<_> = vocabulary.iter().map(|(_, w)| w.to_string()).collect();
/// assert_eq!(words, ["CAT", "DOG"]);
/// assert!(vocabulary.id_of("DOG").is_some());
/// assert!(vocabulary.id_of("dog").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<Word>,
}

impl Vocabulary {
    /// Builds a vocabulary from already normalized words.
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let words: BTreeSet<Word> = words
            .into_iter()
            .map(|w| Word::new(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Returns the number of words.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if there are no words.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the word with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id does not belong to this vocabulary.
    #[must_use]
    #[inline]
    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id.index()]
    }

    /// Looks up the id of a word.
    #[must_use]
    pub fn id_of(&self, text: &str) -> Option<WordId> {
        self.words
            .binary_search(&Word::new(text))
            .ok()
            .map(WordId::new)
    }

    /// Returns an iterator over every id.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = WordId> + use<> {
        (0..self.words.len()).map(WordId::new)
    }

    /// Returns an iterator over every word with its id.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (WordId, &Word)> {
        self.words
            .iter()
            .enumerate()
            .map(|(i, w)| (WordId::new(i), w))
    }
}

impl FromStr for Vocabulary {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(
            s.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_uppercase),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dedups_and_sorts() {
        let vocabulary = Vocabulary::new(["TWO", "ONE", "TWO", ""]);
        assert_eq!(vocabulary.len(), 2);
        assert_eq!(vocabulary.word(WordId::new(0)).to_string(), "ONE");
        assert_eq!(vocabulary.word(WordId::new(1)).to_string(), "TWO");
    }

    #[test]
    fn test_new_keeps_case() {
        let vocabulary = Vocabulary::new(["cat", "CAT"]);
        assert_eq!(vocabulary.len(), 2);
    }

    #[test]
    fn test_parse_normalizes() {
        let vocabulary: Vocabulary = "  seven \r\nSix\n\n".parse().unwrap();
        let words: Vec<_> = vocabulary.iter().map(|(_, w)| w.to_string()).collect();
        assert_eq!(words, ["SEVEN", "SIX"]);
    }

    #[test]
    fn test_id_of() {
        let vocabulary = Vocabulary::new(["A", "B", "C"]);
        assert_eq!(vocabulary.id_of("B"), Some(WordId::new(1)));
        assert_eq!(vocabulary.id_of("D"), None);
    }

    #[test]
    fn test_non_ascii_letters() {
        let word = Word::new("ÉTÉ");
        assert_eq!(word.len(), 3);
        assert_eq!(word.letter(2), 'É');
    }

    #[test]
    fn test_empty() {
        let vocabulary: Vocabulary = "\n\n".parse().unwrap();
        assert!(vocabulary.is_empty());
        assert_eq!(vocabulary.ids().len(), 0);
    }
}
