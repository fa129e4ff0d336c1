use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use pexeso_core::{caseflip, cipher};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

use play::PlayArgs;
use screen::TerminalScreen;

mod play;
mod screen;

#[derive(Parser, Debug)]
#[command(name = "pexeso", version, about = "Small console games and exercises")]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game of pexeso (the default)
    Play(PlayArgs),

    /// Rotate the letters of a line of text (Caesar cipher)
    Encipher {
        /// How far to rotate; negative amounts rotate backwards
        #[arg(long, default_value_t = cipher::ROT13, allow_negative_numbers = true)]
        rotation: i32,

        /// Text to encipher, read from stdin when omitted
        text: Option<String>,
    },

    /// Swap upper- and lowercase letters in a line of text
    Invert {
        /// Text to invert, read from stdin when omitted
        text: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Verbosity flags set the default level; RUST_LOG can still override.
    let filter = EnvFilter::builder()
        .with_default_directive(cli.verbosity.tracing_level_filter().into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(args) => {
            let mut screen = TerminalScreen::new();
            let mut input = io::stdin().lock();
            play::run(&args, &mut screen, &mut input)
        }
        Command::Encipher { rotation, text } => {
            let line = line_or_prompt(text)?;
            println!("{}", cipher::rotate(line.trim_end(), rotation));
            Ok(())
        }
        Command::Invert { text } => {
            let line = line_or_prompt(text)?;
            println!("{}", caseflip::invert(line.trim_end()));
            Ok(())
        }
    }
}

/// Uses the given argument, or prompts for a line on stdin.
fn line_or_prompt(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    print!("Enter a name: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
