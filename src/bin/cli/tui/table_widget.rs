use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use flashdeck_lib::flashcards::CardField;

use super::app_state::{FormMode, TuiState};
use super::ui::centered_rect;

pub fn draw_table(f: &mut Frame, area: Rect, state: &TuiState) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" Cards ({}) ", state.cards.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if state.cards.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No cards yet. Press n to add one.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block);
        f.render_widget(empty, popup);
        return;
    }

    let items: Vec<ListItem> = state.cards.iter()
        .map(|card| ListItem::new(card.front.clone()))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.table_selected));

    f.render_stateful_widget(list, popup, &mut list_state);
}

pub fn draw_form(f: &mut Frame, area: Rect, state: &TuiState) {
    let popup = centered_rect(60, 60, area);
    f.render_widget(Clear, popup);

    let title = match state.form_mode {
        FormMode::New => " New card ",
        FormMode::Edit(_) => " Edit card ",
        FormMode::View => " View card ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(4)])
        .split(inner);

    draw_field(f, rows[0], state, CardField::Front, &state.draft.front, "The word or question on the front");
    draw_field(f, rows[1], state, CardField::Back, &state.draft.back, "The answer on the back");
}

fn draw_field(f: &mut Frame, area: Rect, state: &TuiState, field: CardField, value: &str, help: &str) {
    let editable = state.form_mode != FormMode::View;
    let focused = editable && state.form_field == field;
    let missing = state.form_errors.contains(&field);

    let border = if missing {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let label = match field {
        CardField::Front => " Label ",
        CardField::Back => " Description ",
    };
    let block = Block::default()
        .title(label)
        .title_bottom(if missing {
            Line::from(Span::styled(format!(" The {} is required ", field), Style::default().fg(Color::Red)))
        } else {
            Line::from(Span::styled(format!(" {} ", help), Style::default().fg(Color::DarkGray)))
        })
        .borders(Borders::ALL)
        .border_style(border);

    let text = if focused { format!("{}\u{2588}", value) } else { value.to_string() };
    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

pub fn draw_confirm(f: &mut Frame, area: Rect, state: &TuiState) {
    let popup = centered_rect(50, 20, area);
    f.render_widget(Clear, popup);

    let front = state.selected_card().map(|c| c.front.as_str()).unwrap_or_default();
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(format!("Delete \"{}\"?", front)),
        Line::from(Span::styled("This cannot be undone.", Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Delete card ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(paragraph, popup);
}
