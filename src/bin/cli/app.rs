use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use flashdeck_lib::flashcards::{Card, CardDraft, CardStore, FlashcardStorage};
use flashdeck_lib::settings::{self, Settings};

/// Shared application state for CLI commands
pub struct App {
    pub settings: Settings,
    pub storage: FlashcardStorage,
}

impl App {
    /// Initialize from the resolved data directory
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = settings::resolve_data_dir(data_dir)
            .context("Failed to get data directory")?;

        let settings = Settings::load_or_init(&data_dir)
            .context("Failed to load settings")?;

        let storage = FlashcardStorage::new(data_dir.clone());
        storage.init().context("Failed to initialize card storage")?;

        log::debug!("Using data directory {:?}", data_dir);

        Ok(Self {
            settings,
            storage,
        })
    }

    /// List all cards in collection order
    pub fn list_cards(&self) -> Result<Vec<Card>> {
        self.storage.list().context("Failed to list cards")
    }

    /// Find a card by id prefix, or by front text (case-insensitive prefix match)
    pub fn find_card(&self, query: &str) -> Result<Card> {
        let cards = self.list_cards()?;
        let query_lower = query.trim().to_lowercase();

        if query_lower.is_empty() {
            bail!("Empty card query");
        }

        // Exact id or exact front first
        if let Some(card) = cards.iter().find(|c| {
            c.id.to_string() == query_lower || c.front.to_lowercase() == query_lower
        }) {
            return Ok(card.clone());
        }

        let matches: Vec<&Card> = cards.iter()
            .filter(|c| {
                c.id.to_string().starts_with(&query_lower)
                    || c.front.to_lowercase().starts_with(&query_lower)
            })
            .collect();

        match matches.len() {
            0 => bail!("No card matching '{}'", query),
            1 => Ok(matches[0].clone()),
            _ => bail!("Ambiguous card '{}'. Matches:\n{}", query,
                matches.iter().map(|c| format!("  - {} {}", c.short_id(), c.front)).collect::<Vec<_>>().join("\n")),
        }
    }

    /// Validate a draft and store it as a new card
    pub fn create_card(&mut self, draft: CardDraft) -> Result<Card> {
        let (front, back) = draft.into_sides()?;
        self.storage.create(front, back).context("Failed to create card")
    }

    /// Validate a draft and replace an existing card's sides
    pub fn update_card(&mut self, card: &Card, draft: CardDraft) -> Result<()> {
        let (front, back) = draft.into_sides()?;
        self.storage.update(card.id, front, back).context("Failed to update card")
    }

    pub fn delete_card(&mut self, card: &Card) -> Result<()> {
        self.storage.delete(card.id).context("Failed to delete card")
    }
}
