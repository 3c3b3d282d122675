use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &mut App, query: &str, format: &OutputFormat) -> Result<()> {
    let card = app.find_card(query)?;
    app.delete_card(&card)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": card.id.to_string(),
                "deleted": true,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Deleted card \"{}\"", card.front);
        }
    }

    Ok(())
}
