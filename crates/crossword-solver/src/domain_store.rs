use std::collections::HashSet;

use crossword_core::{Crossword, VariableId, Vocabulary, WordId};

/// Candidate words of every slot.
///
/// Each domain starts as the whole vocabulary and only ever shrinks. Words stay in
/// ascending [`WordId`] order, which is alphabetical order.
///
/// # Examples
///
/// ```
/// use crossword_core::{Crossword, VariableId, Vocabulary};
/// use crossword_solver::DomainStore;
///
/// let crossword = Crossword::new("___\n_##\n_##".parse()?);
/// let vocabulary = Vocabulary::new(["AT", "CAT", "COW"]);
///
/// let mut domains = DomainStore::new(&crossword, &vocabulary);
/// assert_eq!(domains.len(VariableId::new(0)), 3);
///
/// let removed = domains.enforce_node_consistency(&crossword, &vocabulary);
/// assert_eq!(removed, 2);
/// assert_eq!(domains.len(VariableId::new(0)), 2);
/// # Ok::<(), crossword_core::LayoutError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStore {
    domains: Vec<Vec<WordId>>,
}

impl DomainStore {
    /// Seeds every slot of `crossword` with the whole vocabulary.
    #[must_use]
    pub fn new(crossword: &Crossword, vocabulary: &Vocabulary) -> Self {
        let full: Vec<WordId> = vocabulary.ids().collect();
        Self {
            domains: vec![full; crossword.variables().len()],
        }
    }

    /// Removes every word whose length differs from its slot.
    ///
    /// Returns the number of removed words. This is the only unary constraint of a
    /// crossword, so one pass is enough.
    pub fn enforce_node_consistency(
        &mut self,
        crossword: &Crossword,
        vocabulary: &Vocabulary,
    ) -> usize {
        crossword
            .variable_ids()
            .map(|id| {
                let length = crossword.variable(id).length();
                self.retain(id, |word| vocabulary.word(word).len() == length)
            })
            .sum()
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.domains.len()
    }

    /// Returns the candidate words of `id`.
    #[must_use]
    #[inline]
    pub fn domain(&self, id: VariableId) -> &[WordId] {
        &self.domains[id.index()]
    }

    /// Returns the number of candidate words of `id`.
    #[must_use]
    #[inline]
    pub fn len(&self, id: VariableId) -> usize {
        self.domains[id.index()].len()
    }

    /// Returns `true` if `id` has no candidate left.
    #[must_use]
    #[inline]
    pub fn is_empty(&self, id: VariableId) -> bool {
        self.domains[id.index()].is_empty()
    }

    /// Returns `true` if `word` is still a candidate of `id`.
    #[must_use]
    pub fn contains(&self, id: VariableId, word: WordId) -> bool {
        self.domains[id.index()].binary_search(&word).is_ok()
    }

    /// Returns the letters that candidates of `id` place at `offset`.
    #[must_use]
    pub fn letters_at(
        &self,
        vocabulary: &Vocabulary,
        id: VariableId,
        offset: usize,
    ) -> HashSet<char> {
        self.domain(id)
            .iter()
            .map(|&word| vocabulary.word(word))
            .filter(|word| offset < word.len())
            .map(|word| word.letter(offset))
            .collect()
    }

    /// Keeps only the candidates of `id` for which `keep` returns `true`.
    ///
    /// Returns the number of removed words.
    pub fn retain<F>(&mut self, id: VariableId, mut keep: F) -> usize
    where
        F: FnMut(WordId) -> bool,
    {
        let domain = &mut self.domains[id.index()];
        let before = domain.len();
        domain.retain(|&word| keep(word));
        before - domain.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{crossword, vocabulary};

    #[test]
    fn test_new_seeds_full_vocabulary() {
        let crossword = crossword("___\n_##\n_##");
        let vocabulary = vocabulary(&["A", "BB", "CCC"]);
        let domains = DomainStore::new(&crossword, &vocabulary);
        assert_eq!(domains.variable_count(), 2);
        for id in crossword.variable_ids() {
            assert_eq!(domains.len(id), 3);
        }
    }

    #[test]
    fn test_node_consistency_keeps_matching_lengths() {
        let crossword = crossword("____\n_###\n_###");
        let vocabulary = vocabulary(&["AB", "ABC", "ABCD", "BCD", "WXYZ"]);
        let mut domains = DomainStore::new(&crossword, &vocabulary);
        let removed = domains.enforce_node_consistency(&crossword, &vocabulary);
        assert_eq!(removed, 3 + 3);

        for id in crossword.variable_ids() {
            let length = crossword.variable(id).length();
            assert!(
                domains
                    .domain(id)
                    .iter()
                    .all(|&w| vocabulary.word(w).len() == length)
            );
        }
    }

    #[test]
    fn test_node_consistency_is_idempotent() {
        let crossword = crossword("____\n_###\n_###");
        let vocabulary = vocabulary(&["AB", "ABC", "ABCD"]);
        let mut domains = DomainStore::new(&crossword, &vocabulary);
        domains.enforce_node_consistency(&crossword, &vocabulary);
        let snapshot = domains.clone();
        assert_eq!(domains.enforce_node_consistency(&crossword, &vocabulary), 0);
        assert_eq!(domains, snapshot);
    }

    #[test]
    fn test_letters_at() {
        let crossword = crossword("___");
        let vocabulary = vocabulary(&["CAT", "COW", "DOG"]);
        let domains = DomainStore::new(&crossword, &vocabulary);
        let id = VariableId::new(0);
        assert_eq!(domains.letters_at(&vocabulary, id, 0), HashSet::from(['C', 'D']));
        assert_eq!(
            domains.letters_at(&vocabulary, id, 1),
            HashSet::from(['A', 'O'])
        );
    }

    #[test]
    fn test_retain_and_contains() {
        let crossword = crossword("___");
        let vocabulary = vocabulary(&["CAT", "COW", "DOG"]);
        let mut domains = DomainStore::new(&crossword, &vocabulary);
        let id = VariableId::new(0);
        let dog = vocabulary.id_of("DOG").unwrap();
        assert_eq!(domains.retain(id, |w| w != dog), 1);
        assert!(!domains.contains(id, dog));
        assert!(domains.contains(id, vocabulary.id_of("CAT").unwrap()));
        assert_eq!(domains.retain(id, |_| false), 2);
        assert!(domains.is_empty(id));
    }
}
