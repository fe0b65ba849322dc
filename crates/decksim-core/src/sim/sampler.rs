//! Unbiased hand drawing.
//!
//! A hand is a uniform size-h subset of deck positions, produced by a partial
//! Fisher–Yates shuffle. Each step needs a uniform index into the remaining
//! range; raw generator words are rejection-sampled so that no index is
//! favored by modulo bias. The word width follows the deck: 8 bits while the
//! deck fits in a byte, 16 bits while it fits in two, 32 bits beyond that,
//! keeping the rejection rate low at every size.

use crate::model::card::CardId;
use crate::sim::entropy::EntropySource;
use rand::RngCore;

/// Uniform value in `[0, range)` via rejection sampling, 8-bit path.
fn uniform_u8<R: RngCore>(source: &mut EntropySource<R>, range: u16) -> usize {
    let max_acceptable = 256 - (256 % range);
    loop {
        let value = source.next_u8() as u16;
        if value < max_acceptable {
            return (value % range) as usize;
        }
    }
}

/// Uniform value in `[0, range)` via rejection sampling, 16-bit path.
fn uniform_u16<R: RngCore>(source: &mut EntropySource<R>, range: u32) -> usize {
    let max_acceptable = 65_536 - (65_536 % range);
    loop {
        let value = source.next_u16() as u32;
        if value < max_acceptable {
            return (value % range) as usize;
        }
    }
}

/// Uniform value in `[0, range)` via rejection sampling, 32-bit path.
fn uniform_u32<R: RngCore>(source: &mut EntropySource<R>, range: u64) -> usize {
    let max_acceptable = (1u64 << 32) - ((1u64 << 32) % range);
    loop {
        let value = source.next_u32() as u64;
        if value < max_acceptable {
            return (value % range) as usize;
        }
    }
}

/// Draws `min(hand_size, deck.len())` cards, bumping `hand_counts[id]` for
/// each drawn card.
///
/// `deck` is a scratch structure: the partial shuffle swaps drawn positions
/// to the front and later draws overwrite earlier ones without restoring, so
/// its order carries no meaning outside a single call. The multiset of cards
/// is preserved exactly.
pub fn draw_hand<R: RngCore>(
    deck: &mut [CardId],
    hand_size: usize,
    source: &mut EntropySource<R>,
    hand_counts: &mut [u32],
) {
    let deck_size = deck.len();
    let draw = hand_size.min(deck_size);
    for position in 0..draw {
        let range = deck_size - position;
        let offset = if deck_size > u16::MAX as usize + 1 {
            uniform_u32(source, range as u64)
        } else if deck_size > u8::MAX as usize {
            uniform_u16(source, range as u32)
        } else {
            uniform_u8(source, range as u16)
        };
        deck.swap(position, position + offset);
        hand_counts[deck[position]] += 1;
    }
}
