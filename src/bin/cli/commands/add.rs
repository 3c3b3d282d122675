use anyhow::Result;

use flashdeck_lib::flashcards::CardDraft;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &mut App, front: &str, back: Option<String>, format: &OutputFormat) -> Result<()> {
    let draft = CardDraft::new(front, back.unwrap_or_default());
    let card = app.create_card(draft)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&card)?);
        }
        OutputFormat::Plain => {
            println!("Created card \"{}\"", card.front);
            println!("  ID: {}", card.id);
        }
    }

    Ok(())
}
