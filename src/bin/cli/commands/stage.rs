use anyhow::Result;

use flashdeck_lib::carousel::{Action, Session};

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

/// Draw the first deck, replay the moves and print the resulting frame
pub fn run(
    app: &App,
    right: usize,
    left: usize,
    flip: bool,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let cards = app.list_cards()?;
    let mut session = Session::start(&cards);

    for _ in 0..right {
        session = session.apply(Action::AdvanceRight);
    }
    for _ in 0..left {
        session = session.apply(Action::AdvanceLeft);
    }
    if flip {
        session = session.apply(Action::Flip);
    }

    let view = session.view();
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        OutputFormat::Plain => {
            println!("{}", terminal::render_stage(&view, &app.settings, use_color));
        }
    }

    Ok(())
}
