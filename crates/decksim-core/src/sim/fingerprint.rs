use crate::model::combo::Combo;
use crate::model::deck::Deck;
use crate::model::requirement::Requirement;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A requirement paired with how many copies of its card the deck holds.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
struct CountedRequirement {
    requirement: Requirement,
    deck_count: u32,
}

/// Canonical identity of a simulation request.
///
/// Two requests that behave identically trial-for-trial fingerprint equally:
/// deck order is irrelevant (only per-card counts enter), AND-group and
/// OR-option order is irrelevant (everything is sorted), and requirements on
/// cards absent from the deck fold to constants — their hand and deck counts
/// are pinned at zero, so such an option is always satisfied when its `min`
/// is zero and never satisfiable otherwise. A constant-true option erases
/// its whole OR-group (the term always holds); an OR-group left with no
/// options erases its whole AND-group (it can never fire). What remains is
/// exactly the structure that can influence a trial.
///
/// Used both to skip re-simulating unchanged input and as the result-cache
/// key; serializes as part of the cache dump.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint {
    deck_size: usize,
    hand_size: usize,
    trials: u64,
    groups: Vec<Vec<Vec<CountedRequirement>>>,
}

impl Fingerprint {
    pub fn compute(deck: &Deck, combo: &Combo, hand_size: usize, trials: u64) -> Self {
        let mut deck_counts: HashMap<&str, u32> = HashMap::new();
        for card in deck.cards() {
            *deck_counts.entry(card.as_str()).or_insert(0) += 1;
        }
        let mut groups = Vec::with_capacity(combo.groups().len());
        'group: for and_group in combo.groups() {
            let mut terms = Vec::with_capacity(and_group.terms().len());
            for or_group in and_group.terms() {
                let mut options = Vec::with_capacity(or_group.options().len());
                let mut always_satisfied = false;
                for requirement in or_group.options() {
                    match deck_counts.get(requirement.card.as_str()) {
                        Some(&deck_count) => options.push(CountedRequirement {
                            requirement: requirement.clone(),
                            deck_count,
                        }),
                        // Absent card: the option is a constant, true iff it
                        // asks for zero copies.
                        None if requirement.min == 0 => always_satisfied = true,
                        None => {}
                    }
                }
                if always_satisfied {
                    // The term holds on every draw; it carries no identity.
                    continue;
                }
                if options.is_empty() {
                    // Every option was constant-false: the AND-group can
                    // never fire, so the whole group carries no identity.
                    continue 'group;
                }
                options.sort();
                terms.push(options);
            }
            terms.sort();
            groups.push(terms);
        }
        groups.sort();
        Self {
            deck_size: deck.size(),
            hand_size,
            trials,
            groups,
        }
    }
}
