//! Slot and word ordering for the backtracking search.
//!
//! The heuristics read the domains as left by arc consistency. They only decide
//! the order in which the search explores choices; correctness comes from the
//! consistency check the search applies to every tentative assignment.

use std::{cmp::Reverse, collections::HashMap};

use crossword_core::{Assignment, Crossword, VariableId, Vocabulary, WordId};

use crate::DomainStore;

/// How the search picks the next slot to fill.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableOrder {
    /// Fewest remaining candidates first, then most crossings, then lowest id.
    #[default]
    MinimumRemainingValues,
    /// Lowest id first.
    InputOrder,
}

/// How the search orders the candidates of a slot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueOrder {
    /// Words ruling out the fewest candidates of unassigned crossing slots first.
    ///
    /// Ties keep alphabetical order.
    #[default]
    LeastConstraining,
    /// Alphabetical order.
    DomainOrder,
}

/// Picks the next unassigned slot, or `None` if every slot is assigned.
///
/// # Examples
///
/// ```
/// use crossword_core::{Assignment, Crossword, VariableId, Vocabulary};
/// use crossword_solver::{DomainStore, VariableOrder, heuristics};
///
/// let crossword = Crossword::new("___\n_##\n_##".parse()?);
/// let vocabulary = Vocabulary::new(["CAT", "COW", "DOG"]);
/// let mut domains = DomainStore::new(&crossword, &vocabulary);
/// let across = VariableId::new(1);
/// domains.retain(across, |w| w != vocabulary.id_of("DOG").unwrap());
///
/// let assignment = Assignment::new(&crossword);
/// let next = heuristics::select_unassigned_variable(
///     VariableOrder::MinimumRemainingValues,
///     &crossword,
///     &domains,
///     &assignment,
/// );
/// assert_eq!(next, Some(across));
/// # Ok::<(), crossword_core::LayoutError>(())
/// ```
#[must_use]
pub fn select_unassigned_variable(
    order: VariableOrder,
    crossword: &Crossword,
    domains: &DomainStore,
    assignment: &Assignment,
) -> Option<VariableId> {
    let mut unassigned = crossword
        .variable_ids()
        .filter(|&id| !assignment.is_assigned(id));
    match order {
        VariableOrder::MinimumRemainingValues => unassigned.min_by_key(|&id| {
            (
                domains.len(id),
                Reverse(crossword.overlaps().degree(id)),
                id,
            )
        }),
        VariableOrder::InputOrder => unassigned.next(),
    }
}

/// Returns the candidates of `variable` in the order the search should try them.
///
/// Domains need not be node consistent. Under least-constraining order a word
/// too short to reach a crossing rules out that whole crossing slot, and crossing
/// candidates too short to reach the shared cell match no letter.
#[must_use]
pub fn order_domain_values(
    order: ValueOrder,
    crossword: &Crossword,
    vocabulary: &Vocabulary,
    domains: &DomainStore,
    assignment: &Assignment,
    variable: VariableId,
) -> Vec<WordId> {
    let domain = domains.domain(variable);
    match order {
        ValueOrder::DomainOrder => domain.to_vec(),
        ValueOrder::LeastConstraining => {
            let letters = NeighborLetters::new(crossword, vocabulary, domains, assignment, variable);
            let mut ranked: Vec<(WordId, usize)> = domain
                .iter()
                .map(|&word| (word, letters.ruled_out(vocabulary, word)))
                .collect();
            ranked.sort_by_key(|&(_, ruled_out)| ruled_out);
            ranked.into_iter().map(|(word, _)| word).collect()
        }
    }
}

/// Letter histograms of the unassigned slots crossing one slot.
///
/// Each entry holds the offset of the shared cell in the slot being ranked, the
/// domain size of the crossing slot, and how many of its candidates put each letter
/// in the shared cell. A candidate then rules out `total - count[letter]` words, or
/// all `total` if it does not reach the shared cell.
#[derive(Debug)]
struct NeighborLetters {
    neighbors: Vec<(usize, usize, HashMap<char, usize>)>,
}

impl NeighborLetters {
    fn new(
        crossword: &Crossword,
        vocabulary: &Vocabulary,
        domains: &DomainStore,
        assignment: &Assignment,
        variable: VariableId,
    ) -> Self {
        let neighbors = crossword
            .neighbors(variable)
            .iter()
            .filter(|&&neighbor| !assignment.is_assigned(neighbor))
            .filter_map(|&neighbor| {
                let overlap = crossword.overlap(variable, neighbor)?;
                let mut counts: HashMap<char, usize> = HashMap::new();
                for &other in domains.domain(neighbor) {
                    let other = vocabulary.word(other);
                    if overlap.offset_b < other.len() {
                        *counts.entry(other.letter(overlap.offset_b)).or_default() += 1;
                    }
                }
                Some((overlap.offset_a, domains.len(neighbor), counts))
            })
            .collect();
        Self { neighbors }
    }

    fn ruled_out(&self, vocabulary: &Vocabulary, word: WordId) -> usize {
        let word = vocabulary.word(word);
        self.neighbors
            .iter()
            .map(|(offset, total, counts)| {
                if *offset >= word.len() {
                    return *total;
                }
                total - counts.get(&word.letter(*offset)).copied().unwrap_or(0)
            })
            .sum()
    }
}
