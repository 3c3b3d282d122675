mod app;
mod commands;
mod render;
#[cfg(feature = "tui")]
mod tui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "flashdeck-cli", about = "Flashcard collection and review carousel", version)]
struct Cli {
    /// Data directory (default: $FLASHDECK_DATA_DIR or the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List all cards in collection order
    List,

    /// Add a card
    Add {
        /// Label shown on the front
        front: String,
        /// Description shown on the back (use "-" to read from stdin)
        #[arg(long)]
        back: Option<String>,
    },

    /// Change a card's front and/or back
    Edit {
        /// Card id prefix or front text (case-insensitive prefix match)
        card: String,
        #[arg(long)]
        front: Option<String>,
        /// New back text (use "-" to read from stdin)
        #[arg(long)]
        back: Option<String>,
    },

    /// Delete a card
    Delete {
        /// Card id prefix or front text
        card: String,
    },

    /// Show both sides of a card
    Show {
        /// Card id prefix or front text
        card: String,
    },

    /// Print the carousel frame after a sequence of moves
    Stage {
        /// Number of moves to the next card
        #[arg(long, default_value = "0")]
        right: usize,
        /// Number of moves back, applied after the moves right
        #[arg(long, default_value = "0")]
        left: usize,
        /// Flip the active card at the end
        #[arg(long)]
        flip: bool,
    },

    /// Launch the interactive review carousel
    #[cfg(feature = "tui")]
    Review,
}

/// Read content from stdin if piped, or resolve "-" as stdin
fn resolve_content(content: Option<String>) -> Option<String> {
    match content.as_deref() {
        Some("-") => {
            // Explicit stdin read
            let mut buf = String::new();
            std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf).ok();
            Some(buf)
        }
        Some(_) => content,
        None => {
            // Auto-detect piped stdin
            if !stdin_is_tty() {
                let mut buf = String::new();
                std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf).ok();
                if buf.is_empty() { None } else { Some(buf) }
            } else {
                None
            }
        }
    }
}

/// Check if stdin is a terminal (not piped)
fn stdin_is_tty() -> bool {
    unsafe { libc_isatty(0) != 0 }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            #[cfg(feature = "tui")]
            {
                tui::run(cli.data_dir)?;
            }
            #[cfg(not(feature = "tui"))]
            {
                eprintln!("TUI not available (built without 'tui' feature). Use a subcommand.");
                eprintln!("Run with --help for usage.");
                std::process::exit(1);
            }
        }
        Some(Command::List) => {
            let app = app::App::new(cli.data_dir)?;
            commands::list::run(&app, &cli.format, use_color)?;
        }
        Some(Command::Add { front, back }) => {
            let mut app = app::App::new(cli.data_dir)?;
            let back = resolve_content(back);
            commands::add::run(&mut app, &front, back, &cli.format)?;
        }
        Some(Command::Edit { card, front, back }) => {
            let mut app = app::App::new(cli.data_dir)?;
            let back = match back.as_deref() {
                Some("-") => resolve_content(back),
                _ => back,
            };
            commands::edit::run(&mut app, &card, front, back, &cli.format)?;
        }
        Some(Command::Delete { card }) => {
            let mut app = app::App::new(cli.data_dir)?;
            commands::delete::run(&mut app, &card, &cli.format)?;
        }
        Some(Command::Show { card }) => {
            let app = app::App::new(cli.data_dir)?;
            commands::show::run(&app, &card, &cli.format, use_color)?;
        }
        Some(Command::Stage { right, left, flip }) => {
            let app = app::App::new(cli.data_dir)?;
            commands::stage::run(&app, right, left, flip, &cli.format, use_color)?;
        }
        #[cfg(feature = "tui")]
        Some(Command::Review) => {
            tui::run(cli.data_dir)?;
        }
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}
