use serde::{Deserialize, Serialize};

use super::slot::SlotPosition;

/// Widest a card gets, in percent of the carousel width
pub const CARD_WIDTH_PERCENT: f32 = 80.0;

/// Placement of a slot relative to the carousel area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    /// Card center from the left edge, in percent of the width
    pub horizontal_offset_percent: f32,
    /// Card center from the top edge, in percent of the height
    pub vertical_offset_percent: f32,
    pub rotation_degrees: f32,
}

impl Geometry {
    const fn new(horizontal: f32, vertical: f32, rotation: f32) -> Self {
        Self {
            horizontal_offset_percent: horizontal,
            vertical_offset_percent: vertical,
            rotation_degrees: rotation,
        }
    }

    /// Whether any part of a full-width card overlaps the visible area
    pub fn is_on_screen(&self) -> bool {
        let half = CARD_WIDTH_PERCENT / 2.0;
        self.horizontal_offset_percent - half < 100.0
            && self.horizontal_offset_percent + half > 0.0
    }
}

pub fn position_to_geometry(position: SlotPosition) -> Geometry {
    match position {
        SlotPosition::InvisibleLeft => Geometry::new(-60.0, 40.0, 60.0),
        SlotPosition::Left => Geometry::new(-10.0, 50.0, -30.0),
        SlotPosition::Middle => Geometry::new(50.0, 60.0, 0.0),
        SlotPosition::Right => Geometry::new(110.0, 50.0, 30.0),
        SlotPosition::InvisibleRight => Geometry::new(160.0, 40.0, 60.0),
    }
}
