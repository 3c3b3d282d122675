//! Data models for the flashcard collection

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A flashcard with a label (front) and a description (back)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: Uuid,
    pub front: String,
    pub back: String,
    /// Order within the collection; new cards go last
    #[serde(default)]
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    pub fn new(front: String, back: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            front,
            back,
            position: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace both sides, keeping the id
    pub fn edit(&mut self, front: String, back: String) {
        self.front = front;
        self.back = back;
        self.updated_at = Utc::now();
    }

    /// Short id used by the CLI for display and prefix lookup
    pub fn short_id(&self) -> String {
        self.id.to_string()[..8].to_string()
    }
}

/// Field of the card form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardField {
    /// The label shown on the front
    Front,
    /// The description shown on the back
    Back,
}

impl fmt::Display for CardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Front => write!(f, "label"),
            Self::Back => write!(f, "description"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Missing required field(s): {}", join_fields(.0))]
    MissingFields(Vec<CardField>),
}

fn join_fields(fields: &[CardField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Unsaved input from the card form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    pub front: String,
    pub back: String,
}

impl CardDraft {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }

    /// Prefill from an existing card (edit and view modes)
    pub fn from_card(card: &Card) -> Self {
        Self::new(card.front.clone(), card.back.clone())
    }

    /// Every blank field is reported, not just the first one
    pub fn validate(&self) -> Result<(), DraftError> {
        let mut missing = Vec::new();
        if self.front.trim().is_empty() {
            missing.push(CardField::Front);
        }
        if self.back.trim().is_empty() {
            missing.push(CardField::Back);
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DraftError::MissingFields(missing))
        }
    }

    /// Validate and hand back the trimmed sides
    pub fn into_sides(self) -> Result<(String, String), DraftError> {
        self.validate()?;
        Ok((self.front.trim().to_string(), self.back.trim().to_string()))
    }

    pub fn field_mut(&mut self, field: CardField) -> &mut String {
        match field {
            CardField::Front => &mut self.front,
            CardField::Back => &mut self.back,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_reports_both_missing_fields() {
        let draft = CardDraft::new("  ", "");
        assert_eq!(
            draft.validate(),
            Err(DraftError::MissingFields(vec![CardField::Front, CardField::Back]))
        );
    }

    #[test]
    fn test_draft_reports_single_missing_field() {
        let draft = CardDraft::new("Hola", "\n");
        let err = draft.validate().unwrap_err();
        assert_eq!(err, DraftError::MissingFields(vec![CardField::Back]));
        assert_eq!(err.to_string(), "Missing required field(s): description");
    }

    #[test]
    fn test_into_sides_trims() {
        let (front, back) = CardDraft::new(" Hola ", " Hello\n").into_sides().unwrap();
        assert_eq!(front, "Hola");
        assert_eq!(back, "Hello");
    }

    #[test]
    fn test_edit_keeps_id() {
        let mut card = Card::new("a".to_string(), "b".to_string());
        let id = card.id;
        card.edit("c".to_string(), "d".to_string());
        assert_eq!(card.id, id);
        assert_eq!(card.front, "c");
        assert_eq!(card.back, "d");
        assert!(card.updated_at >= card.created_at);
    }

    #[test]
    fn test_card_json_is_camel_case() {
        let card = Card::new("a".to_string(), "b".to_string());
        let json = serde_json::to_value(&card).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }
}
