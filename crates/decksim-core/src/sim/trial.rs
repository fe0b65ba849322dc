use crate::model::card::CardId;
use crate::model::combo::CompiledCombo;
use crate::sim::entropy::EntropySource;
use crate::sim::sampler::draw_hand;
use rand::RngCore;
use rand::rngs::OsRng;

/// Runs independent draw-and-evaluate trials against one interned deck.
///
/// The deck vec doubles as the sampler's scratch array and the hand-count
/// buffer is cleared and reused, so the trial loop allocates nothing.
#[derive(Debug)]
pub struct TrialRunner<R: RngCore> {
    deck: Vec<CardId>,
    deck_counts: Vec<u32>,
    combo: CompiledCombo,
    hand_size: usize,
    hand_counts: Vec<u32>,
    source: EntropySource<R>,
}

impl TrialRunner<OsRng> {
    /// Runner backed by the operating system's CSPRNG.
    pub fn new(
        deck: Vec<CardId>,
        deck_counts: Vec<u32>,
        combo: CompiledCombo,
        hand_size: usize,
    ) -> Self {
        Self::with_source(deck, deck_counts, combo, hand_size, EntropySource::from_os())
    }
}

impl<R: RngCore> TrialRunner<R> {
    /// Runner with an explicit byte source; deterministic when the source is.
    pub fn with_source(
        deck: Vec<CardId>,
        deck_counts: Vec<u32>,
        combo: CompiledCombo,
        hand_size: usize,
        source: EntropySource<R>,
    ) -> Self {
        let num_cards = deck_counts.len();
        Self {
            deck,
            deck_counts,
            combo,
            hand_size,
            hand_counts: vec![0u32; num_cards],
            source,
        }
    }

    /// Runs `trials` independent trials and returns how many drew a hand
    /// satisfying the combo.
    pub fn run(&mut self, trials: u64) -> u64 {
        let mut successes = 0;
        for _ in 0..trials {
            self.hand_counts.fill(0);
            draw_hand(
                &mut self.deck,
                self.hand_size,
                &mut self.source,
                &mut self.hand_counts,
            );
            if self.combo.satisfies(&self.hand_counts, &self.deck_counts) {
                successes += 1;
            }
        }
        successes
    }
}
