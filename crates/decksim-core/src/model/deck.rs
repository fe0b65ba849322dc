use crate::model::card::{CardId, CardTable, FILLER_CARD};

/// A deck as a flat multiset of card identities. Order carries no meaning;
/// only multiplicities matter for simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<String>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<String>) -> Self {
        Self { cards }
    }

    pub fn push(&mut self, card: impl Into<String>, copies: u32) {
        let card = card.into();
        for _ in 0..copies {
            self.cards.push(card.clone());
        }
    }

    /// Extends the deck with filler cards up to `total`. A total at or below
    /// the current size is a no-op.
    pub fn pad_to(&mut self, total: usize) {
        while self.cards.len() < total {
            self.cards.push(FILLER_CARD.to_string());
        }
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    pub fn count_of(&self, card: &str) -> u32 {
        self.cards.iter().filter(|c| *c == card).count() as u32
    }

    /// Interns every card and returns the deck as dense ids, ready for the
    /// sampling hot loop.
    pub fn intern(&self, table: &mut CardTable) -> Vec<CardId> {
        self.cards.iter().map(|card| table.intern(card)).collect()
    }
}

/// Per-id copy counts for an interned deck. `num_cards` must cover every id
/// the combo may reference, not just those present in the deck.
pub fn count_by_id(deck: &[CardId], num_cards: usize) -> Vec<u32> {
    let mut counts = vec![0u32; num_cards];
    for &id in deck {
        counts[id] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::{Deck, count_by_id};
    use crate::model::card::{CardTable, FILLER_CARD};

    #[test]
    fn push_repeats_copies() {
        let mut deck = Deck::new();
        deck.push("card a", 3);
        deck.push("card b", 1);
        assert_eq!(deck.size(), 4);
        assert_eq!(deck.count_of("card a"), 3);
    }

    #[test]
    fn pad_to_fills_with_unknown_cards() {
        let mut deck = Deck::new();
        deck.push("card a", 2);
        deck.pad_to(5);
        assert_eq!(deck.size(), 5);
        assert_eq!(deck.count_of(FILLER_CARD), 3);
    }

    #[test]
    fn pad_to_smaller_total_is_noop() {
        let mut deck = Deck::new();
        deck.push("card a", 4);
        deck.pad_to(2);
        assert_eq!(deck.size(), 4);
    }

    #[test]
    fn interned_counts_cover_combo_only_cards() {
        let mut deck = Deck::new();
        deck.push("card a", 2);
        deck.push("card b", 1);
        let mut table = CardTable::new();
        let ids = deck.intern(&mut table);
        // A combo card that never appears in the deck still gets an id.
        let missing = table.intern("card c");
        let counts = count_by_id(&ids, table.len());
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[missing], 0);
        assert_eq!(counts.iter().sum::<u32>(), 3);
    }
}
