//! Review session state
//!
//! A `Session` is replaced as a whole on every input. Navigation and flipping
//! return a new record and leave the old one untouched; the deck is shared
//! between records.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::deck::{draw_first_deck, is_playable};
use super::engine::{self, Direction, WINDOW};
use super::slot::{stage_card_positions, SlotPosition};
use super::stage::Stage;
use crate::flashcards::Card;

/// The logical inputs the carousel understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    AdvanceLeft,
    AdvanceRight,
    Flip,
}

impl Action {
    /// What selecting (clicking) a slot does
    pub fn for_slot(position: SlotPosition) -> Option<Self> {
        match position {
            SlotPosition::Left => Some(Self::AdvanceLeft),
            SlotPosition::Middle => Some(Self::Flip),
            SlotPosition::Right => Some(Self::AdvanceRight),
            SlotPosition::InvisibleLeft | SlotPosition::InvisibleRight => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    deck: Arc<[Card]>,
    cursor: usize,
    flipped: bool,
    playable: bool,
}

impl Session {
    /// Draw the first deck from the collection and start at its first card
    pub fn start(all_cards: &[Card]) -> Self {
        let deck = draw_first_deck(all_cards);
        let playable = is_playable(&deck);
        log::debug!("Drew deck of {} cards (playable: {})", deck.len(), playable);

        Self {
            deck: deck.into(),
            cursor: 0,
            flipped: false,
            playable,
        }
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn stage(&self) -> Stage {
        Stage::from_cursor(self.cursor, self.deck.len())
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn is_playable(&self) -> bool {
        self.playable
    }

    /// Card in the middle slot
    pub fn active_card(&self) -> Option<&Card> {
        self.deck.get(self.cursor)
    }

    pub fn apply(&self, action: Action) -> Session {
        match action {
            Action::AdvanceLeft => self.advance(Direction::Left),
            Action::AdvanceRight => self.advance(Direction::Right),
            Action::Flip => self.flip(),
        }
    }

    /// Move one card. Clamped moves and unplayable sessions change nothing.
    pub fn advance(&self, direction: Direction) -> Session {
        if !self.playable {
            return self.clone();
        }

        let transition = engine::advance(self.cursor, self.deck.len(), direction);
        if !transition.moved {
            return self.clone();
        }

        log::debug!(
            "Moved {:?} to card {} ({})",
            direction,
            transition.cursor,
            transition.stage.as_str()
        );

        Session {
            deck: Arc::clone(&self.deck),
            cursor: transition.cursor,
            flipped: false,
            playable: self.playable,
        }
    }

    pub fn flip(&self) -> Session {
        if !self.playable {
            return self.clone();
        }

        Session {
            flipped: !self.flipped,
            ..self.clone()
        }
    }

    /// Act on a selected slot; buffer slots are inert
    pub fn select(&self, position: SlotPosition) -> Session {
        match Action::for_slot(position) {
            Some(action) => self.apply(action),
            None => self.clone(),
        }
    }

    /// Redraw after the collection was edited.
    ///
    /// Only a session that never became playable picks up the new cards; once
    /// playable the deck stays as drawn.
    pub fn redraw(&self, all_cards: &[Card]) -> Session {
        if self.playable {
            return self.clone();
        }

        log::debug!("Redrawing unplayable deck from {} cards", all_cards.len());
        Session::start(all_cards)
    }

    pub fn view(&self) -> StageView<'_> {
        let stage = self.stage();
        StageView {
            stage,
            cursor: self.cursor,
            cards: engine::stage_cards(&self.deck, self.cursor),
            positions: stage_card_positions(stage),
            flipped: self.flipped,
            playable: self.playable,
        }
    }
}

/// Everything the rendering layer needs for one frame
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageView<'a> {
    pub stage: Stage,
    pub cursor: usize,
    pub cards: [Option<&'a Card>; WINDOW],
    pub positions: [SlotPosition; WINDOW],
    pub flipped: bool,
    pub playable: bool,
}

impl<'a> StageView<'a> {
    /// Slots paired with their cards, left to right
    pub fn slots(&self) -> impl Iterator<Item = (SlotPosition, Option<&'a Card>)> + '_ {
        self.positions.iter().copied().zip(self.cards.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flashcards::{CardStore, MemoryCardStore};

    fn store(fronts: &[&str]) -> MemoryCardStore {
        MemoryCardStore::with_cards(fronts.iter().map(|f| (*f, format!("{} back", f))))
    }

    fn cards(fronts: &[&str]) -> Vec<Card> {
        store(fronts).list().unwrap()
    }

    fn fronts(view: &StageView<'_>) -> Vec<Option<String>> {
        view.cards.iter().map(|c| c.map(|c| c.front.clone())).collect()
    }

    fn five() -> Session {
        Session::start(&cards(&["A", "B", "C", "D", "E"]))
    }

    #[test]
    fn test_initial_view() {
        let session = five();
        let view = session.view();

        assert!(view.playable);
        assert_eq!(view.stage, Stage::NoneLeft);
        assert_eq!(view.cursor, 0);
        assert_eq!(
            fronts(&view),
            vec![None, None, Some("A".into()), Some("B".into()), Some("C".into())]
        );
        assert_eq!(
            view.positions,
            [
                SlotPosition::InvisibleLeft,
                SlotPosition::Left,
                SlotPosition::Middle,
                SlotPosition::Right,
                SlotPosition::InvisibleRight,
            ]
        );
    }

    #[test]
    fn test_advance_right_once() {
        let next = five().apply(Action::AdvanceRight);
        let view = next.view();

        assert_eq!(view.cursor, 1);
        assert_eq!(view.stage, Stage::HasLeft);
        assert_eq!(
            fronts(&view),
            vec![None, Some("A".into()), Some("B".into()), Some("C".into()), Some("D".into())]
        );
    }

    #[test]
    fn test_old_record_is_untouched() {
        let first = five();
        let second = first.apply(Action::AdvanceRight).apply(Action::Flip);

        assert_eq!(first.cursor(), 0);
        assert!(!first.is_flipped());
        assert_eq!(second.cursor(), 1);
        assert!(second.is_flipped());
        assert!(std::ptr::eq(first.deck().as_ptr(), second.deck().as_ptr()));
    }

    #[test]
    fn test_accepted_move_resets_flip() {
        for flipped_first in [false, true] {
            let mut session = five().apply(Action::AdvanceRight);
            if flipped_first {
                session = session.apply(Action::Flip);
            }
            assert!(!session.apply(Action::AdvanceRight).is_flipped());
            assert!(!session.apply(Action::AdvanceLeft).is_flipped());
        }
    }

    #[test]
    fn test_clamped_move_keeps_flip() {
        let mut session = five();
        for _ in 0..4 {
            session = session.apply(Action::AdvanceRight);
        }
        assert_eq!(session.stage(), Stage::NoneRight);

        let flipped = session.apply(Action::Flip);
        let after = flipped.apply(Action::AdvanceRight);

        assert_eq!(after.cursor(), 4);
        assert_eq!(after.stage(), Stage::NoneRight);
        assert!(after.is_flipped());
    }

    #[test]
    fn test_clamped_left_at_start_keeps_flip() {
        let session = five().apply(Action::Flip).apply(Action::AdvanceLeft);
        assert_eq!(session.cursor(), 0);
        assert!(session.is_flipped());
    }

    #[test]
    fn test_flip_toggles_without_moving() {
        let session = five().apply(Action::AdvanceRight);
        let flipped = session.apply(Action::Flip);
        assert!(flipped.is_flipped());
        assert_eq!(flipped.cursor(), 1);
        assert!(!flipped.apply(Action::Flip).is_flipped());
    }

    #[test]
    fn test_unplayable_session_ignores_input() {
        let session = Session::start(&cards(&["A", "B", "C"]));
        assert!(!session.is_playable());

        for action in [Action::AdvanceRight, Action::AdvanceLeft, Action::Flip] {
            let next = session.apply(action);
            assert_eq!(next.cursor(), 0);
            assert_eq!(next.stage(), Stage::NoneLeft);
            assert!(!next.is_flipped());
        }

        assert_eq!(
            fronts(&session.view()),
            vec![None, None, Some("A".into()), Some("B".into()), Some("C".into())]
        );
    }

    #[test]
    fn test_empty_collection() {
        let session = Session::start(&[]);
        assert!(!session.is_playable());
        assert!(session.active_card().is_none());
        assert!(session.view().cards.iter().all(Option::is_none));
    }

    #[test]
    fn test_select_maps_slots_to_actions() {
        let session = five().apply(Action::AdvanceRight).apply(Action::AdvanceRight);

        assert_eq!(session.select(SlotPosition::Left).cursor(), 1);
        assert_eq!(session.select(SlotPosition::Right).cursor(), 3);
        assert!(session.select(SlotPosition::Middle).is_flipped());

        let inert = session.select(SlotPosition::InvisibleRight);
        assert_eq!(inert.cursor(), 2);
        assert!(!inert.is_flipped());
    }

    #[test]
    fn test_redraw_picks_up_cards_while_unplayable() {
        let session = Session::start(&cards(&["A", "B"]));
        let redrawn = session.redraw(&cards(&["A", "B", "C", "D", "E", "F"]));

        assert!(redrawn.is_playable());
        assert_eq!(redrawn.deck().len(), 6);
        assert_eq!(redrawn.cursor(), 0);
    }

    #[test]
    fn test_redraw_after_adding_through_store() {
        let mut store = store(&["A", "B", "C"]);
        let session = Session::start(&store.list().unwrap());
        assert!(!session.is_playable());

        store.create("D".to_string(), "D back".to_string()).unwrap();
        store.create("E".to_string(), "E back".to_string()).unwrap();
        let redrawn = session.redraw(&store.list().unwrap());

        assert!(redrawn.is_playable());
        let order: Vec<&str> = redrawn.deck().iter().map(|c| c.front.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_edit_through_store_reaches_unplayable_deck() {
        let mut store = store(&["A", "B"]);
        let session = Session::start(&store.list().unwrap());

        let first = store.list().unwrap()[0].id;
        store.update(first, "Z".to_string(), "Z back".to_string()).unwrap();
        let redrawn = session.redraw(&store.list().unwrap());

        assert_eq!(redrawn.active_card().map(|c| c.front.as_str()), Some("Z"));
        assert_eq!(session.active_card().map(|c| c.front.as_str()), Some("A"));
    }

    #[test]
    fn test_redraw_still_unplayable() {
        let session = Session::start(&cards(&["A"]));
        let redrawn = session.redraw(&cards(&["A", "B", "C", "D"]));
        assert!(!redrawn.is_playable());
        assert_eq!(redrawn.deck().len(), 4);
    }

    #[test]
    fn test_redraw_keeps_playable_deck() {
        let session = five().apply(Action::AdvanceRight);
        let redrawn = session.redraw(&cards(&["X"]));

        assert_eq!(redrawn.deck().len(), 5);
        assert_eq!(redrawn.cursor(), 1);
        assert_eq!(redrawn.active_card().map(|c| c.front.as_str()), Some("B"));
    }

    #[test]
    fn test_view_slots_in_lockstep() {
        let session = five().apply(Action::AdvanceRight);
        let view = session.view();
        let middle = view
            .slots()
            .find(|(position, _)| *position == SlotPosition::Middle)
            .and_then(|(_, card)| card);
        assert_eq!(middle.map(|c| c.front.as_str()), Some("B"));
    }

    #[test]
    fn test_view_serializes() {
        let session = five();
        let json = serde_json::to_value(session.view()).unwrap();
        assert_eq!(json["stage"], "none-left");
        assert_eq!(json["positions"][2], "middle");
        assert!(json["cards"][0].is_null());
        assert_eq!(json["cards"][2]["front"], "A");
    }
}
