use std::fmt;

use serde::{Deserialize, Serialize};

use super::stage::Stage;

/// One of the five concurrently rendered slots, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotPosition {
    InvisibleLeft,
    Left,
    Middle,
    Right,
    InvisibleRight,
}

impl SlotPosition {
    pub const ALL: [SlotPosition; 5] = [
        Self::InvisibleLeft,
        Self::Left,
        Self::Middle,
        Self::Right,
        Self::InvisibleRight,
    ];

    /// Only the three on-screen slots react to input
    pub fn is_interactive(self) -> bool {
        !self.is_buffer()
    }

    /// Off-screen slots that only exist for transition continuity
    pub fn is_buffer(self) -> bool {
        matches!(self, Self::InvisibleLeft | Self::InvisibleRight)
    }

    /// Buffers jump straight to their place without animating
    pub fn animates(self) -> bool {
        !self.is_buffer()
    }

    /// Keyboard shortcut announced on the card in this slot
    pub fn key_shortcut(self) -> Option<&'static str> {
        match self {
            Self::Left => Some("ArrowLeft"),
            Self::Middle => Some("F"),
            Self::Right => Some("ArrowRight"),
            Self::InvisibleLeft | Self::InvisibleRight => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvisibleLeft => "invisible-left",
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
            Self::InvisibleRight => "invisible-right",
        }
    }
}

impl fmt::Display for SlotPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slot positions for a stage, indexed in lockstep with `stage_cards`.
///
/// The slots never reorder; moving through the deck changes which cards sit
/// under them, so every stage yields the same left-to-right layout.
pub fn stage_card_positions(_stage: Stage) -> [SlotPosition; 5] {
    SlotPosition::ALL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_middle_per_stage() {
        for stage in [Stage::NoneLeft, Stage::HasLeft, Stage::NoneRight] {
            let positions = stage_card_positions(stage);
            let middles = positions.iter().filter(|p| **p == SlotPosition::Middle).count();
            assert_eq!(middles, 1, "stage {:?}", stage);
            assert_eq!(positions[2], SlotPosition::Middle);
        }
    }

    #[test]
    fn test_buffers_are_inert() {
        for position in SlotPosition::ALL {
            assert_eq!(position.is_buffer(), position.key_shortcut().is_none());
            assert_eq!(position.is_interactive(), position.animates());
        }
        assert!(!SlotPosition::InvisibleLeft.is_interactive());
        assert!(SlotPosition::Middle.is_interactive());
    }

    #[test]
    fn test_key_shortcuts() {
        assert_eq!(SlotPosition::Left.key_shortcut(), Some("ArrowLeft"));
        assert_eq!(SlotPosition::Middle.key_shortcut(), Some("F"));
        assert_eq!(SlotPosition::Right.key_shortcut(), Some("ArrowRight"));
    }

    #[test]
    fn test_display_matches_serde() {
        for position in SlotPosition::ALL {
            let json = serde_json::to_string(&position).unwrap();
            assert_eq!(json, format!("\"{}\"", position));
        }
    }
}
