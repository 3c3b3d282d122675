use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use flashdeck_lib::carousel::MIN_PLAYABLE_CARDS;

use super::app_state::{FormMode, Mode, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    // Show flash message if present
    if let Some(ref msg) = state.flash_message {
        let flash = Paragraph::new(format!(" {}", msg))
            .style(Style::default().bg(Color::Green).fg(Color::Black));
        f.render_widget(flash, area);
        return;
    }

    let hints = match state.mode {
        Mode::Carousel => " t: cards  q: quit ",
        Mode::Table => " j/k: navigate  n: new  e: edit  Enter: view  d: delete  Esc: close ",
        Mode::Form if state.form_mode == FormMode::View => " Esc: back ",
        Mode::Form => " Tab: switch field  Enter: save  Esc: cancel ",
        Mode::ConfirmDelete => " y: delete  n: keep ",
    };

    let session = &state.session;
    let position = if session.is_playable() {
        format!(" {}/{} ", session.cursor() + 1, session.deck().len())
    } else {
        format!(
            " {} of {} cards needed ",
            session.deck().len(),
            MIN_PLAYABLE_CARDS
        )
    };

    let width = area.width as usize;
    let pad = width.saturating_sub(hints.chars().count() + position.chars().count());
    let text = format!("{}{}{}", hints, " ".repeat(pad), position);

    let status = Paragraph::new(text)
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status, area);
}

pub fn draw_key_hints(f: &mut Frame, area: Rect, state: &TuiState) {
    let style = if state.session.is_playable() {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let hints = Line::from(vec![
        Span::styled("\u{2190}", style.add_modifier(Modifier::BOLD)),
        Span::styled(" Previous card   ", style),
        Span::styled("\u{2192}", style.add_modifier(Modifier::BOLD)),
        Span::styled(" Next card   ", style),
        Span::styled("f", style.add_modifier(Modifier::BOLD)),
        Span::styled(" Flip", style),
    ]);

    f.render_widget(Paragraph::new(hints).alignment(Alignment::Center), area);
}
