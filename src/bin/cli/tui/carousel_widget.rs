use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use flashdeck_lib::carousel::{position_to_geometry, Geometry, SlotPosition};

use super::app_state::TuiState;

/// Share of the carousel a single card covers
const CARD_WIDTH_PERCENT: u32 = 34;
const CARD_HEIGHT_PERCENT: u32 = 70;

pub fn draw(f: &mut Frame, area: Rect, state: &mut TuiState) {
    let block = Block::default()
        .title(" Flashdeck ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let view = state.session.view();
    let settings = &state.app.settings;

    // The middle card is drawn last so it sits on top of its neighbours
    let mut slots: Vec<_> = view.slots().collect();
    slots.sort_by_key(|(position, _)| *position == SlotPosition::Middle);

    let mut slot_areas = Vec::new();
    for (position, card) in slots {
        let Some(rect) = slot_rect(inner, position_to_geometry(position)) else {
            continue;
        };

        let is_middle = position == SlotPosition::Middle;
        let show_back = is_middle && view.flipped;
        let text = match card {
            Some(card) if show_back => card.back.as_str(),
            Some(card) => card.front.as_str(),
            None if show_back => settings.placeholder_back.as_str(),
            None => settings.placeholder_front.as_str(),
        };

        let title = if is_middle {
            (if show_back { " back " } else { " front " }).to_string()
        } else {
            key_label(position).map(|k| format!(" {} ", k)).unwrap_or_default()
        };

        let (border, body) = if is_middle && view.playable {
            (
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )
        } else if is_middle {
            (Style::default().fg(Color::Yellow), Style::default().fg(Color::Gray))
        } else {
            (Style::default().fg(Color::DarkGray), Style::default().fg(Color::DarkGray))
        };

        let card_block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border);

        // Pad to roughly center the text vertically
        let padding = rect.height.saturating_sub(3) / 2;
        let mut lines: Vec<Line> = (0..padding).map(|_| Line::from("")).collect();
        lines.extend(text.lines().map(|l| Line::from(Span::styled(l.to_string(), body))));

        let paragraph = Paragraph::new(lines)
            .block(card_block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        f.render_widget(Clear, rect);
        f.render_widget(paragraph, rect);
        slot_areas.push((position, rect));
    }

    state.slot_areas = slot_areas;
}

/// Terminal cell area for a slot, or `None` for off-screen buffers.
///
/// The visible slots' offsets are stretched across the free width so the
/// left and right cards touch the edges instead of being cut off.
pub fn slot_rect(area: Rect, geometry: Geometry) -> Option<Rect> {
    if !geometry.is_on_screen() {
        return None;
    }

    let left = position_to_geometry(SlotPosition::Left);
    let right = position_to_geometry(SlotPosition::Right);
    let middle = position_to_geometry(SlotPosition::Middle);

    let card_w = (area.width as u32 * CARD_WIDTH_PERCENT / 100) as u16;
    let card_h = (area.height as u32 * CARD_HEIGHT_PERCENT / 100) as u16;

    let frac_x = (geometry.horizontal_offset_percent - left.horizontal_offset_percent)
        / (right.horizontal_offset_percent - left.horizontal_offset_percent);
    let frac_y = (geometry.vertical_offset_percent - left.vertical_offset_percent)
        / (middle.vertical_offset_percent - left.vertical_offset_percent);

    let x = area.x + (area.width.saturating_sub(card_w) as f32 * frac_x.clamp(0.0, 1.0)).round() as u16;
    let y = area.y + (area.height.saturating_sub(card_h) as f32 * frac_y.clamp(0.0, 1.0)).round() as u16;

    Some(Rect::new(x, y, card_w, card_h))
}

/// Short on-card hint for a slot's shortcut
fn key_label(position: SlotPosition) -> Option<&'static str> {
    position.key_shortcut().map(|key| match key {
        "ArrowLeft" => "\u{2190}",
        "ArrowRight" => "\u{2192}",
        _ => "f",
    })
}
