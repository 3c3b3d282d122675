mod app_state;
mod carousel_widget;
mod key_handler;
mod status_bar;
mod table_widget;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;

use crate::app::App;
use app_state::TuiState;

pub fn run(data_dir: Option<PathBuf>) -> Result<()> {
    let app = App::new(data_dir)?;
    let mut state = TuiState::new(app)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Event loop
    let result = run_loop(&mut terminal, &mut state);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, state: &mut TuiState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, state))?;

        if state.quit {
            return Ok(());
        }

        // One input at a time; each finishes before the next is read
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let was_playable = state.session.is_playable();
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                key_handler::handle_key(state, key);
            }
            Event::Mouse(mouse) => {
                key_handler::handle_mouse(state, mouse);
            }
            _ => {}
        }

        state.announce_if_playable(was_playable);
    }
}
