//! Deck selection policy

use crate::flashcards::Card;

/// Cards needed to fill every slot, buffers included
pub const MIN_PLAYABLE_CARDS: usize = 5;

/// Build the in-play deck from the whole collection.
///
/// Keeps collection order (position, then creation time). Undersized and empty
/// collections are fine; the caller checks `is_playable`.
pub fn draw_first_deck(all_cards: &[Card]) -> Vec<Card> {
    let mut deck = all_cards.to_vec();
    deck.sort_by(|a, b| {
        a.position
            .cmp(&b.position)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
    deck
}

pub fn is_playable(deck: &[Card]) -> bool {
    deck.len() >= MIN_PLAYABLE_CARDS
}
