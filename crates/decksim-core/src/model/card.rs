use std::collections::HashMap;

/// Identity used to pad a deck up to its declared total.
pub const FILLER_CARD: &str = "UNKNOWN CARD";

/// Dense index assigned to a card identity for the duration of one run.
pub type CardId = usize;

/// Bijection between card identity strings and dense ids in `[0, len)`.
///
/// Built once per simulation run from the union of deck and combo cards so
/// the per-trial hot loop can count into a flat array instead of a map.
/// Discarded after the run.
#[derive(Debug, Default)]
pub struct CardTable {
    ids: HashMap<String, CardId>,
    names: Vec<String>,
}

impl CardTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `name`, assigning the next free id on first sight.
    pub fn intern(&mut self, name: &str) -> CardId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.ids.insert(name.to_string(), id);
        self.names.push(name.to_string());
        id
    }

    pub fn id(&self, name: &str) -> Option<CardId> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, id: CardId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::CardTable;

    #[test]
    fn interning_is_idempotent() {
        let mut table = CardTable::new();
        let a = table.intern("card a");
        let b = table.intern("card b");
        assert_ne!(a, b);
        assert_eq!(table.intern("card a"), a);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn ids_are_dense_and_reversible() {
        let mut table = CardTable::new();
        for (expected, name) in ["x", "y", "z"].into_iter().enumerate() {
            assert_eq!(table.intern(name), expected);
        }
        assert_eq!(table.id("y"), Some(1));
        assert_eq!(table.name(2), Some("z"));
        assert_eq!(table.name(3), None);
    }
}
