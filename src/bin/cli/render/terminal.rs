use flashdeck_lib::carousel::{SlotPosition, StageView};
use flashdeck_lib::flashcards::Card;
use flashdeck_lib::settings::Settings;

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

const WRAP_WIDTH: usize = 72;

fn paint(text: &str, code: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", code, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Render both sides of a card
pub fn render_card(card: &Card, use_color: bool) -> String {
    let mut lines = vec![paint(&card.front, Color::BOLD, use_color)];
    lines.push(paint(&format!("id {}", card.id), Color::DIM, use_color));
    lines.push(String::new());
    lines.extend(wrap_lines(&card.back, "", WRAP_WIDTH));
    lines.join("\n")
}

/// Render one frame of the carousel as text, one line per slot
pub fn render_stage(view: &StageView<'_>, settings: &Settings, use_color: bool) -> String {
    let mut lines = Vec::new();

    let has_active = view.slots().any(|(position, card)| position == SlotPosition::Middle && card.is_some());
    let card = if has_active {
        format!("card {}", view.cursor + 1)
    } else {
        "no cards".to_string()
    };
    let status = format!(
        "stage {}  {}  {}",
        view.stage.as_str(),
        card,
        if view.playable { "playable" } else { "not playable" },
    );
    lines.push(paint(&status, Color::DIM, use_color));

    for (position, card) in view.slots() {
        let is_middle = position == SlotPosition::Middle;
        let text = match card {
            Some(card) if is_middle && view.flipped => card.back.clone(),
            Some(card) => card.front.clone(),
            None if is_middle && view.flipped => settings.placeholder_back.clone(),
            None => settings.placeholder_front.clone(),
        };

        let label = format!("{:<16}", position.as_str());
        let line = if is_middle {
            format!("{} {}", paint(&label, Color::CYAN, use_color), paint(&text, Color::BOLD, use_color))
        } else if position.is_buffer() {
            format!("{} {}", paint(&label, Color::GRAY, use_color), paint(&text, Color::GRAY, use_color))
        } else {
            format!("{} {}", label, text)
        };
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// Simple word-wrapping for terminal output
pub fn wrap_lines(text: &str, prefix: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let effective_width = max_width.saturating_sub(prefix.len());

    for line in text.lines() {
        if line.chars().count() <= effective_width {
            lines.push(format!("{}{}", prefix, line));
        } else {
            let mut current_line = String::new();
            for word in line.split_whitespace() {
                if current_line.is_empty() {
                    current_line = word.to_string();
                } else if current_line.chars().count() + 1 + word.chars().count() <= effective_width {
                    current_line.push(' ');
                    current_line.push_str(word);
                } else {
                    lines.push(format!("{}{}", prefix, current_line));
                    current_line = word.to_string();
                }
            }
            if !current_line.is_empty() {
                lines.push(format!("{}{}", prefix, current_line));
            }
        }
    }

    if lines.is_empty() && !text.is_empty() {
        lines.push(format!("{}{}", prefix, text));
    }

    lines
}
