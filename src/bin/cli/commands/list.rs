use anyhow::Result;

use flashdeck_lib::carousel::MIN_PLAYABLE_CARDS;

use crate::app::App;
use crate::render::terminal::Color;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let cards = app.list_cards()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&cards)?);
        }
        OutputFormat::Plain => {
            if cards.is_empty() {
                println!("(no cards)");
            }
            for card in &cards {
                if use_color {
                    println!("{}{}{}  {}", Color::DIM, card.short_id(), Color::RESET, card.front);
                } else {
                    println!("{}  {}", card.short_id(), card.front);
                }
            }

            if cards.len() < MIN_PLAYABLE_CARDS {
                println!();
                println!(
                    "{} card(s); add {} more to start reviewing.",
                    cards.len(),
                    MIN_PLAYABLE_CARDS - cards.len()
                );
            }
        }
    }

    Ok(())
}
