use serde::{Deserialize, Serialize};

/// Where the five-slot window sits within the deck
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// At the first card, nothing to the left
    #[default]
    NoneLeft,
    /// Somewhere in the middle of the deck
    HasLeft,
    /// At the last card, nothing to the right
    NoneRight,
}

impl Stage {
    /// Derive the stage from the cursor instead of storing it next to one.
    ///
    /// The start wins over the end, so a one-card deck is `NoneLeft`.
    pub fn from_cursor(cursor: usize, len: usize) -> Self {
        if cursor == 0 {
            Self::NoneLeft
        } else if cursor + 1 >= len {
            Self::NoneRight
        } else {
            Self::HasLeft
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoneLeft => "none-left",
            Self::HasLeft => "has-left",
            Self::NoneRight => "none-right",
        }
    }
}
