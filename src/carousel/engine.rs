//! Stage transitions and slot projection
//!
//! Everything here is a pure function of (cursor, deck). The cursor is the
//! index of the card in the middle slot; the stage is derived from it.

use serde::{Deserialize, Serialize};

use super::stage::Stage;
use crate::flashcards::Card;

/// Number of slots rendered at once
pub const WINDOW: usize = 5;

/// Slot index of the active card
const MIDDLE: usize = WINDOW / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Back to the previous card
    Left,
    /// On to the next card
    Right,
}

/// Outcome of one navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub cursor: usize,
    pub stage: Stage,
    /// False when the step was clamped at a deck boundary
    pub moved: bool,
}

/// Move the cursor one card, clamping at both ends of the deck
pub fn advance(cursor: usize, len: usize, direction: Direction) -> Transition {
    let cursor = cursor.min(len.saturating_sub(1));

    let next = match direction {
        Direction::Right if cursor + 1 < len => Some(cursor + 1),
        Direction::Left if cursor > 0 => Some(cursor - 1),
        _ => None,
    };

    match next {
        Some(next) => Transition {
            cursor: next,
            stage: Stage::from_cursor(next, len),
            moved: true,
        },
        None => Transition {
            cursor,
            stage: Stage::from_cursor(cursor, len),
            moved: false,
        },
    }
}

/// Cards under each slot: deck indices `cursor - 2 ..= cursor + 2`.
///
/// Indices outside the deck project `None`.
pub fn stage_cards(deck: &[Card], cursor: usize) -> [Option<&Card>; WINDOW] {
    std::array::from_fn(|slot| {
        cursor
            .checked_add(slot)
            .and_then(|index| index.checked_sub(MIDDLE))
            .and_then(|index| deck.get(index))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(fronts: &[&str]) -> Vec<Card> {
        fronts
            .iter()
            .map(|f| Card::new(f.to_string(), format!("{} back", f)))
            .collect()
    }

    fn fronts(cards: [Option<&Card>; WINDOW]) -> Vec<Option<&str>> {
        cards.iter().map(|c| c.map(|c| c.front.as_str())).collect()
    }

    #[test]
    fn test_projection_at_start() {
        let deck = deck(&["A", "B", "C", "D", "E"]);
        assert_eq!(
            fronts(stage_cards(&deck, 0)),
            vec![None, None, Some("A"), Some("B"), Some("C")]
        );
    }

    #[test]
    fn test_first_advance_right() {
        let deck = deck(&["A", "B", "C", "D", "E"]);
        let t = advance(0, deck.len(), Direction::Right);

        assert_eq!(t, Transition { cursor: 1, stage: Stage::HasLeft, moved: true });
        assert_eq!(
            fronts(stage_cards(&deck, t.cursor)),
            vec![None, Some("A"), Some("B"), Some("C"), Some("D")]
        );
    }

    #[test]
    fn test_projection_at_end() {
        let deck = deck(&["A", "B", "C", "D", "E"]);
        assert_eq!(
            fronts(stage_cards(&deck, 4)),
            vec![Some("C"), Some("D"), Some("E"), None, None]
        );
    }

    #[test]
    fn test_walk_to_end_takes_len_minus_one_steps() {
        for len in 5..12 {
            let mut cursor = 0;
            let mut steps = 0;
            loop {
                let t = advance(cursor, len, Direction::Right);
                if !t.moved {
                    break;
                }
                cursor = t.cursor;
                steps += 1;
                if t.stage == Stage::NoneRight {
                    break;
                }
            }
            assert_eq!(steps, len - 1);
            assert_eq!(cursor, len - 1);

            let clamped = advance(cursor, len, Direction::Right);
            assert!(!clamped.moved);
            assert_eq!(clamped.cursor, cursor);
            assert_eq!(clamped.stage, Stage::NoneRight);
        }
    }

    #[test]
    fn test_round_trip() {
        let len = 8;
        for n in 0..len {
            let mut cursor = 0;
            for _ in 0..n {
                cursor = advance(cursor, len, Direction::Right).cursor;
            }
            for _ in 0..n {
                cursor = advance(cursor, len, Direction::Left).cursor;
            }
            assert_eq!(cursor, 0);
            assert_eq!(Stage::from_cursor(cursor, len), Stage::NoneLeft);
        }
    }

    #[test]
    fn test_left_at_start_is_clamped() {
        let t = advance(0, 5, Direction::Left);
        assert_eq!(t, Transition { cursor: 0, stage: Stage::NoneLeft, moved: false });
    }

    #[test]
    fn test_left_from_end() {
        let t = advance(4, 5, Direction::Left);
        assert_eq!(t, Transition { cursor: 3, stage: Stage::HasLeft, moved: true });
    }

    #[test]
    fn test_empty_deck_never_moves() {
        for direction in [Direction::Left, Direction::Right] {
            let t = advance(0, 0, direction);
            assert!(!t.moved);
            assert_eq!(t.cursor, 0);
        }
        assert_eq!(stage_cards(&[], 0), [None; WINDOW]);
    }

    #[test]
    fn test_short_decks_clamp() {
        let t = advance(0, 1, Direction::Right);
        assert!(!t.moved);
        assert_eq!(t.stage, Stage::NoneLeft);

        let t = advance(0, 2, Direction::Right);
        assert_eq!(t, Transition { cursor: 1, stage: Stage::NoneRight, moved: true });
    }

    #[test]
    fn test_out_of_range_cursor_is_pulled_back() {
        let t = advance(42, 5, Direction::Right);
        assert_eq!(t, Transition { cursor: 4, stage: Stage::NoneRight, moved: false });
    }

    #[test]
    fn test_projection_past_the_deck_is_empty() {
        let deck = deck(&["A", "B", "C", "D", "E"]);
        assert_eq!(
            fronts(stage_cards(&deck, 6)),
            vec![Some("E"), None, None, None, None]
        );
        assert_eq!(stage_cards(&deck, usize::MAX), [None; WINDOW]);
        assert_eq!(stage_cards(&deck, usize::MAX - 1), [None; WINDOW]);
    }
}
