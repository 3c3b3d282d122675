//! The card store seam between the review engine and persistence

use uuid::Uuid;

use super::models::Card;
use super::storage::Result;

/// Synchronous, immediately consistent card persistence
pub trait CardStore {
    /// All cards in collection order
    fn list(&self) -> Result<Vec<Card>>;

    fn create(&mut self, front: String, back: String) -> Result<Card>;

    fn update(&mut self, id: Uuid, front: String, back: String) -> Result<()>;

    fn delete(&mut self, id: Uuid) -> Result<()>;
}
