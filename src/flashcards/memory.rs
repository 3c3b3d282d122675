//! In-process card store

use uuid::Uuid;

use super::models::Card;
use super::storage::{FlashcardStorageError, Result};
use super::store::CardStore;

/// Card store that lives only as long as the process
#[derive(Debug, Default, Clone)]
pub struct MemoryCardStore {
    cards: Vec<Card>,
    next_position: i32,
}

impl MemoryCardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from (front, back) pairs in order
    pub fn with_cards<I, F, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, B)>,
        F: Into<String>,
        B: Into<String>,
    {
        let mut store = Self::new();
        for (front, back) in pairs {
            store.push(front.into(), back.into());
        }
        store
    }

    fn push(&mut self, front: String, back: String) -> Card {
        let mut card = Card::new(front, back);
        card.position = self.next_position;
        self.next_position += 1;
        self.cards.push(card.clone());
        card
    }

    fn find_mut(&mut self, id: Uuid) -> Result<&mut Card> {
        self.cards
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(FlashcardStorageError::CardNotFound(id))
    }
}

impl CardStore for MemoryCardStore {
    fn list(&self) -> Result<Vec<Card>> {
        Ok(self.cards.clone())
    }

    fn create(&mut self, front: String, back: String) -> Result<Card> {
        Ok(self.push(front, back))
    }

    fn update(&mut self, id: Uuid, front: String, back: String) -> Result<()> {
        self.find_mut(id)?.edit(front, back);
        Ok(())
    }

    fn delete(&mut self, id: Uuid) -> Result<()> {
        let before = self.cards.len();
        self.cards.retain(|c| c.id != id);
        if self.cards.len() == before {
            return Err(FlashcardStorageError::CardNotFound(id));
        }
        Ok(())
    }
}
