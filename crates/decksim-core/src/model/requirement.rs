use serde::{Deserialize, Serialize};

/// Sentinel for an open-ended upper bound ("at least n").
pub const UNBOUNDED: u32 = u32::MAX;

/// A single count condition on one card identity.
///
/// With `in_deck` false the requirement holds when the hand contains between
/// `min` and `max` copies (inclusive). With `in_deck` true it holds when at
/// least `min` copies remain undrawn, i.e. deck count minus hand count is
/// `min` or more; `max` is ignored.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Requirement {
    pub card: String,
    pub min: u32,
    pub max: u32,
    pub in_deck: bool,
}

impl Requirement {
    /// Exactly `count` copies in hand.
    pub fn exactly(card: impl Into<String>, count: u32) -> Self {
        Self {
            card: card.into(),
            min: count,
            max: count,
            in_deck: false,
        }
    }

    /// At least `count` copies in hand. A bare card mention parses to
    /// `at_least(card, 1)`.
    pub fn at_least(card: impl Into<String>, count: u32) -> Self {
        Self {
            card: card.into(),
            min: count,
            max: UNBOUNDED,
            in_deck: false,
        }
    }

    /// At least `count` copies left undrawn in the deck.
    pub fn remaining(card: impl Into<String>, count: u32) -> Self {
        Self {
            card: card.into(),
            min: count,
            max: UNBOUNDED,
            in_deck: true,
        }
    }
}
