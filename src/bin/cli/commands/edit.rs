use anyhow::{bail, Result};

use flashdeck_lib::flashcards::CardDraft;

use crate::app::App;
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    query: &str,
    front: Option<String>,
    back: Option<String>,
    format: &OutputFormat,
) -> Result<()> {
    if front.is_none() && back.is_none() {
        bail!("Nothing to change; pass --front and/or --back");
    }

    let card = app.find_card(query)?;

    // Unspecified sides keep their current text
    let mut draft = CardDraft::from_card(&card);
    if let Some(front) = front {
        draft.front = front;
    }
    if let Some(back) = back {
        draft.back = back;
    }

    app.update_card(&card, draft)?;
    let updated = app.storage.get_card(card.id)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&updated)?);
        }
        OutputFormat::Plain => {
            println!("Updated card \"{}\"", updated.front);
            println!("  ID: {}", updated.id);
        }
    }

    Ok(())
}
