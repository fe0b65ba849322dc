use crate::model::card::{CardId, CardTable};
use crate::model::requirement::Requirement;

/// One alternative within an AND-term: satisfied when any requirement holds.
/// The parser never produces an empty group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrGroup {
    options: Vec<Requirement>,
}

impl OrGroup {
    pub fn new(options: Vec<Requirement>) -> Self {
        debug_assert!(!options.is_empty(), "empty OR-group is invalid");
        Self { options }
    }

    pub fn single(requirement: Requirement) -> Self {
        Self::new(vec![requirement])
    }

    pub fn options(&self) -> &[Requirement] {
        &self.options
    }
}

/// A conjunction of OR-groups; satisfied when every group has a satisfied
/// option. An AND-group with zero terms is vacuously satisfied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AndGroup {
    terms: Vec<OrGroup>,
}

impl AndGroup {
    pub fn new(terms: Vec<OrGroup>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[OrGroup] {
        &self.terms
    }
}

/// AND-of-ORs combo: satisfied when at least one AND-group is satisfied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Combo {
    groups: Vec<AndGroup>,
}

impl Combo {
    pub fn new(groups: Vec<AndGroup>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[AndGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates every requirement in the combo, in source order.
    pub fn requirements(&self) -> impl Iterator<Item = &Requirement> {
        self.groups
            .iter()
            .flat_map(|and| and.terms())
            .flat_map(|or| or.options())
    }
}

/// A requirement rewritten against the dense card table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompiledRequirement {
    pub card: CardId,
    pub min: u32,
    pub max: u32,
    pub in_deck: bool,
}

impl CompiledRequirement {
    fn satisfied_by(&self, hand_counts: &[u32], deck_counts: &[u32]) -> bool {
        let hand = hand_counts.get(self.card).copied().unwrap_or(0);
        if self.in_deck {
            let deck = deck_counts.get(self.card).copied().unwrap_or(0);
            deck.saturating_sub(hand) >= self.min
        } else {
            hand >= self.min && hand <= self.max
        }
    }
}

/// Interned form of a [`Combo`], evaluated against dense count arrays in the
/// per-trial hot loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledCombo {
    groups: Vec<Vec<Vec<CompiledRequirement>>>,
}

impl CompiledCombo {
    /// Interns every referenced card (including cards absent from the deck,
    /// which simply count as zero) and flattens the tree for evaluation.
    pub fn compile(combo: &Combo, table: &mut CardTable) -> Self {
        let groups = combo
            .groups()
            .iter()
            .map(|and| {
                and.terms()
                    .iter()
                    .map(|or| {
                        or.options()
                            .iter()
                            .map(|req| CompiledRequirement {
                                card: table.intern(&req.card),
                                min: req.min,
                                max: req.max,
                                in_deck: req.in_deck,
                            })
                            .collect()
                    })
                    .collect()
            })
            .collect();
        Self { groups }
    }

    /// Pure satisfaction check. Short-circuits on the first satisfying
    /// AND-group and fails fast on the first unsatisfied OR-group.
    pub fn satisfies(&self, hand_counts: &[u32], deck_counts: &[u32]) -> bool {
        self.groups.iter().any(|and| {
            and.iter().all(|or| {
                or.iter()
                    .any(|req| req.satisfied_by(hand_counts, deck_counts))
            })
        })
    }
}
