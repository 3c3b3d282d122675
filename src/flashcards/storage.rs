//! File-backed card storage
//!
//! Directory structure:
//! ```text
//! {data_dir}/flashcards/
//! └── cards/
//!     └── {card-id}.json   # Individual card files
//! ```

use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

use super::models::Card;
use super::store::CardStore;

#[derive(Error, Debug)]
pub enum FlashcardStorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Card not found: {0}")]
    CardNotFound(Uuid),
}

pub type Result<T> = std::result::Result<T, FlashcardStorageError>;

/// Storage manager for flashcard operations
pub struct FlashcardStorage {
    /// Base path for app data (e.g., ~/.local/share/flashdeck)
    data_dir: PathBuf,
}

impl FlashcardStorage {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Get the flashcards directory
    fn flashcards_dir(&self) -> PathBuf {
        self.data_dir.join("flashcards")
    }

    /// Get the cards directory
    fn cards_dir(&self) -> PathBuf {
        self.flashcards_dir().join("cards")
    }

    /// Get the path for a specific card
    fn card_path(&self, card_id: Uuid) -> PathBuf {
        self.cards_dir().join(format!("{}.json", card_id))
    }

    /// Initialize flashcard storage directories
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(self.cards_dir())?;
        Ok(())
    }

    /// List all cards in collection order
    pub fn list_cards(&self) -> Result<Vec<Card>> {
        let cards_dir = self.cards_dir();
        if !cards_dir.exists() {
            return Ok(Vec::new());
        }

        let mut cards = Vec::new();
        for entry in fs::read_dir(&cards_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                let content = fs::read_to_string(&path)?;
                match serde_json::from_str::<Card>(&content) {
                    Ok(card) => cards.push(card),
                    Err(e) => log::warn!("Skipping unreadable card file {:?}: {}", path, e),
                }
            }
        }

        cards.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        Ok(cards)
    }

    /// Get a specific card
    pub fn get_card(&self, card_id: Uuid) -> Result<Card> {
        let card_path = self.card_path(card_id);
        if !card_path.exists() {
            return Err(FlashcardStorageError::CardNotFound(card_id));
        }

        let content = fs::read_to_string(&card_path)?;
        let card: Card = serde_json::from_str(&content)?;
        Ok(card)
    }

    /// Create a new card at the end of the collection
    pub fn create_card(&self, front: String, back: String) -> Result<Card> {
        self.init()?;

        let position = self
            .list_cards()?
            .iter()
            .map(|c| c.position)
            .max()
            .map_or(0, |p| p + 1);

        let mut card = Card::new(front, back);
        card.position = position;

        self.write_card(&card)?;
        log::info!("Created card {} at position {}", card.id, position);

        Ok(card)
    }

    /// Replace the front and back of a card
    pub fn update_card(&self, card_id: Uuid, front: String, back: String) -> Result<Card> {
        let mut card = self.get_card(card_id)?;
        card.edit(front, back);

        self.write_card(&card)?;
        log::info!("Updated card {}", card_id);

        Ok(card)
    }

    /// Delete a card
    pub fn delete_card(&self, card_id: Uuid) -> Result<()> {
        let card_path = self.card_path(card_id);
        if !card_path.exists() {
            return Err(FlashcardStorageError::CardNotFound(card_id));
        }

        fs::remove_file(&card_path)?;
        log::info!("Deleted card {}", card_id);

        Ok(())
    }

    fn write_card(&self, card: &Card) -> Result<()> {
        let card_path = self.card_path(card.id);
        fs::write(&card_path, serde_json::to_string_pretty(card)?)?;
        Ok(())
    }
}

impl CardStore for FlashcardStorage {
    fn list(&self) -> Result<Vec<Card>> {
        self.list_cards()
    }

    fn create(&mut self, front: String, back: String) -> Result<Card> {
        self.create_card(front, back)
    }

    fn update(&mut self, id: Uuid, front: String, back: String) -> Result<()> {
        self.update_card(id, front, back).map(|_| ())
    }

    fn delete(&mut self, id: Uuid) -> Result<()> {
        self.delete_card(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (FlashcardStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FlashcardStorage::new(temp_dir.path().to_path_buf());
        (storage, temp_dir)
    }

    #[test]
    fn test_list_without_directory_is_empty() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.list_cards().unwrap().is_empty());
    }

    #[test]
    fn test_create_and_get_card() {
        let (storage, _temp) = create_test_storage();

        let created = storage
            .create_card("Hola".to_string(), "Hello".to_string())
            .unwrap();

        let retrieved = storage.get_card(created.id).unwrap();
        assert_eq!(retrieved, created);
    }

    #[test]
    fn test_list_keeps_creation_order() {
        let (storage, _temp) = create_test_storage();

        for i in 0..4 {
            storage
                .create_card(format!("Front {}", i), format!("Back {}", i))
                .unwrap();
        }

        let fronts: Vec<String> = storage
            .list_cards()
            .unwrap()
            .into_iter()
            .map(|c| c.front)
            .collect();
        assert_eq!(fronts, vec!["Front 0", "Front 1", "Front 2", "Front 3"]);
    }

    #[test]
    fn test_position_after_delete_does_not_collide() {
        let (storage, _temp) = create_test_storage();

        let a = storage.create_card("a".to_string(), "1".to_string()).unwrap();
        let b = storage.create_card("b".to_string(), "2".to_string()).unwrap();
        storage.delete_card(a.id).unwrap();
        let c = storage.create_card("c".to_string(), "3".to_string()).unwrap();

        assert!(c.position > b.position);
        let fronts: Vec<String> = storage.list_cards().unwrap().into_iter().map(|c| c.front).collect();
        assert_eq!(fronts, vec!["b", "c"]);
    }

    #[test]
    fn test_update_card_keeps_id_and_position() {
        let (storage, _temp) = create_test_storage();

        let created = storage.create_card("a".to_string(), "b".to_string()).unwrap();
        let updated = storage
            .update_card(created.id, "c".to_string(), "d".to_string())
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.position, created.position);
        assert_eq!(storage.get_card(created.id).unwrap().front, "c");
    }

    #[test]
    fn test_missing_card_errors() {
        let (storage, _temp) = create_test_storage();
        let id = Uuid::new_v4();

        assert!(matches!(
            storage.get_card(id),
            Err(FlashcardStorageError::CardNotFound(missing)) if missing == id
        ));
        assert!(storage.delete_card(id).is_err());
        assert!(storage.update_card(id, "a".to_string(), "b".to_string()).is_err());
    }

    #[test]
    fn test_unreadable_files_are_skipped() {
        let (storage, temp) = create_test_storage();
        storage.create_card("a".to_string(), "b".to_string()).unwrap();

        let cards_dir = temp.path().join("flashcards").join("cards");
        fs::write(cards_dir.join("broken.json"), "{ not json").unwrap();
        fs::write(cards_dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(storage.list_cards().unwrap().len(), 1);
    }

    #[test]
    fn test_card_store_trait() {
        let (mut storage, _temp) = create_test_storage();

        let card = CardStore::create(&mut storage, "a".to_string(), "b".to_string()).unwrap();
        CardStore::update(&mut storage, card.id, "x".to_string(), "y".to_string()).unwrap();
        assert_eq!(CardStore::list(&storage).unwrap()[0].back, "y");

        CardStore::delete(&mut storage, card.id).unwrap();
        assert!(CardStore::list(&storage).unwrap().is_empty());
    }
}
