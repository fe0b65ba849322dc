pub mod cache;
pub mod model;
pub mod parse;
pub mod sim;

pub use cache::{DEFAULT_CACHE_CAPACITY, ResultCache};
pub use model::card::{CardId, CardTable, FILLER_CARD};
pub use model::combo::{AndGroup, Combo, CompiledCombo, CompiledRequirement, OrGroup};
pub use model::deck::{Deck, count_by_id};
pub use model::requirement::{Requirement, UNBOUNDED};
pub use parse::{ComboParse, DeckParse, parse_combo, parse_deck};
pub use sim::entropy::EntropySource;
pub use sim::fingerprint::Fingerprint;
pub use sim::sampler::draw_hand;
pub use sim::split::split_trials;
pub use sim::trial::TrialRunner;
