use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use flashdeck_lib::carousel::Action;

use super::app_state::{FormMode, Mode, TuiState};

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    // Clear flash message on any keypress
    state.flash_message = None;

    match state.mode {
        Mode::Carousel => handle_carousel_key(state, key),
        Mode::Table => handle_table_key(state, key),
        Mode::Form => handle_form_key(state, key),
        Mode::ConfirmDelete => handle_confirm_key(state, key),
    }
}

/// Physical keys for the three carousel actions
fn carousel_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Left | KeyCode::Char('h') => Some(Action::AdvanceLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::AdvanceRight),
        KeyCode::Char('f') | KeyCode::Char('F') | KeyCode::Char(' ') => Some(Action::Flip),
        _ => None,
    }
}

fn handle_carousel_key(state: &mut TuiState, key: KeyEvent) {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return;
    }

    if let Some(action) = carousel_action(key.code) {
        state.apply(action);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.quit = true,
        KeyCode::Char('t') | KeyCode::Char('c') => state.open_table(),
        _ => {}
    }
}

fn handle_table_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => state.close_table(),
        KeyCode::Char('j') | KeyCode::Down => state.table_move_down(),
        KeyCode::Char('k') | KeyCode::Up => state.table_move_up(),
        KeyCode::Char('n') | KeyCode::Char('a') => state.open_new_form(),
        KeyCode::Char('e') => state.open_edit_form(),
        KeyCode::Char('v') | KeyCode::Enter => state.open_view_form(),
        KeyCode::Char('d') | KeyCode::Delete => state.ask_delete(),
        _ => {}
    }
}

fn handle_form_key(state: &mut TuiState, key: KeyEvent) {
    if state.form_mode == FormMode::View {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            state.close_form();
        }
        return;
    }

    match key.code {
        KeyCode::Esc => state.close_form(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => state.toggle_form_field(),
        KeyCode::Enter => state.submit_form(),
        KeyCode::Backspace => state.form_backspace(),
        KeyCode::Char(c) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                state.form_input(c);
            }
        }
        _ => {}
    }
}

fn handle_confirm_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => state.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => state.mode = Mode::Table,
        _ => {}
    }
}

pub fn handle_mouse(state: &mut TuiState, mouse: MouseEvent) {
    if state.mode != Mode::Carousel {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(position) = state.slot_at(mouse.column, mouse.row) {
                state.select_slot(position);
            }
        }
        MouseEventKind::ScrollDown => state.apply(Action::AdvanceRight),
        MouseEventKind::ScrollUp => state.apply(Action::AdvanceLeft),
        _ => {}
    }
}
