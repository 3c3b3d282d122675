use ratatui::prelude::*;
use ratatui::layout::{Constraint, Direction, Layout};

use super::app_state::{Mode, TuiState};
use super::{carousel_widget, status_bar, table_widget};

pub fn draw(f: &mut Frame, state: &mut TuiState) {
    let size = f.area();
    let hints_height = if state.app.settings.show_key_hints { 1 } else { 0 };

    // Main layout: carousel + key hints + status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(hints_height),
            Constraint::Length(1),
        ])
        .split(size);

    carousel_widget::draw(f, outer[0], state);
    if hints_height > 0 {
        status_bar::draw_key_hints(f, outer[1], state);
    }
    status_bar::draw(f, outer[2], state);

    match state.mode {
        Mode::Carousel => {}
        Mode::Table => table_widget::draw_table(f, size, state),
        Mode::Form => {
            table_widget::draw_table(f, size, state);
            table_widget::draw_form(f, size, state);
        }
        Mode::ConfirmDelete => {
            table_widget::draw_table(f, size, state);
            table_widget::draw_confirm(f, size, state);
        }
    }
}

/// Rect of the given percentage size, centered in `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
