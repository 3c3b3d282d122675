//! Review carousel
//!
//! Five slots are rendered at once: two off-screen buffers, left, middle
//! (the active card) and right. This module decides which cards enter play,
//! which card sits under each slot as the user moves, and where each slot is
//! drawn.

pub mod deck;
pub mod engine;
pub mod projector;
pub mod session;
pub mod slot;
pub mod stage;

pub use deck::{draw_first_deck, is_playable, MIN_PLAYABLE_CARDS};
pub use engine::{advance, stage_cards, Direction, Transition, WINDOW};
pub use projector::{position_to_geometry, Geometry};
pub use session::{Action, Session, StageView};
pub use slot::{stage_card_positions, SlotPosition};
pub use stage::Stage;
