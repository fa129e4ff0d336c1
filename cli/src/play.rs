use anyhow::{Context, Result, bail};
use pexeso_core::{
    CardLayout, Coord2, GameConfig, LayoutGenerator, PexesoEngine, RoundOutcome,
    ShuffledLayoutGenerator, parse_coords,
};
use std::io::BufRead;

use crate::screen::Screen;

/// Fixed board of the reference configuration: 4 columns by 3 rows.
pub const BOARD_SIZE: Coord2 = (4, 3);

const WELCOME: &str = "Shall we play a game? Let's play pexeso!";

#[derive(clap::Args, Debug, Default)]
pub struct PlayArgs {
    /// Play the classic hand-laid board instead of a shuffled one
    #[arg(long)]
    pub classic: bool,

    /// Seed for the board shuffle, random when omitted
    #[arg(long, conflicts_with = "classic")]
    pub seed: Option<u64>,
}

pub fn run(args: &PlayArgs, screen: &mut impl Screen, input: &mut impl BufRead) -> Result<()> {
    let layout = if args.classic {
        CardLayout::reference()
    } else {
        let seed = args.seed.unwrap_or_else(rand::random);
        log::info!("shuffling board from seed {seed}");
        ShuffledLayoutGenerator::new(seed)
            .generate(GameConfig::new(BOARD_SIZE))
            .context("could not generate a board")?
    };

    let mut engine = PexesoEngine::new(layout);
    game_loop(&mut engine, screen, input)
}

/// Drives rounds until the board is solved: two prompted reveals, a redraw
/// after each, then the match resolution and a status line.
fn game_loop(
    engine: &mut PexesoEngine,
    screen: &mut impl Screen,
    input: &mut impl BufRead,
) -> Result<()> {
    let mut message = String::from(WELCOME);

    loop {
        screen.draw(engine, &message)?;
        let first = read_coords(engine, screen, input)?;
        engine.reveal(first)?;

        screen.draw(engine, &message)?;
        let second = read_coords(engine, screen, input)?;
        engine.reveal(second)?;

        screen.draw(engine, &message)?;

        match engine.resolve_round(first, second)? {
            RoundOutcome::Won => break,
            RoundOutcome::AlreadyMatched => {
                screen.line("You've already seen these cards!")?;
            }
            RoundOutcome::Matched | RoundOutcome::NoMatch => {}
        }

        message = format!(
            "You found {} pairs! Need {} more pairs to win ...",
            engine.pairs_found(),
            engine.pairs_left()
        );
        pause(screen, input)?;
    }

    let win = format!("You've WON! It only took you {} turns!", engine.turns());
    screen.draw(engine, &win)?;
    Ok(())
}

/// Prompts until the player enters valid coordinates for this board.
fn read_coords(
    engine: &PexesoEngine,
    screen: &mut impl Screen,
    input: &mut impl BufRead,
) -> Result<Coord2> {
    let (cols, rows) = engine.size();
    let prompt = format!(
        "What shall I show you [A-{} 1-{}]: ",
        (b'A' + rows - 1) as char,
        cols
    );

    loop {
        screen.prompt(&prompt)?;
        match parse_coords(&read_line(input)?, engine.size()) {
            Ok(coords) => return Ok(coords),
            Err(err) => screen.line(&format!("{err}, try again."))?,
        }
    }
}

fn pause(screen: &mut impl Screen, input: &mut impl BufRead) -> Result<()> {
    screen.prompt("Press ENTER key to continue ...")?;
    read_line(input)?;
    Ok(())
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed before the game was over");
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Default)]
    struct RecordingScreen {
        log: String,
    }

    impl Screen for RecordingScreen {
        fn clear(&mut self) -> io::Result<()> {
            Ok(())
        }

        fn line(&mut self, text: &str) -> io::Result<()> {
            self.log.push_str(text);
            self.log.push('\n');
            Ok(())
        }

        fn prompt(&mut self, text: &str) -> io::Result<()> {
            self.log.push_str(text);
            Ok(())
        }
    }

    // Solves the classic board pair by pair; the final round needs no
    // trailing pause line because the loop exits on the win.
    const WINNING_SCRIPT: &str = "a1\na2\n\n\
                                  a3\nb1\n\n\
                                  a4\nc2\n\n\
                                  b2\nc4\n\n\
                                  b3\nc3\n\n\
                                  b4\nc1\n";

    #[test]
    fn scripted_game_is_won_in_six_turns() {
        let mut engine = PexesoEngine::new(CardLayout::reference());
        let mut screen = RecordingScreen::default();
        let mut input = WINNING_SCRIPT.as_bytes();

        game_loop(&mut engine, &mut screen, &mut input).unwrap();

        assert!(engine.is_finished());
        assert_eq!(engine.turns(), 6);
        assert!(screen.log.contains("You found 1 pairs!"));
        assert!(screen.log.contains("You've WON! It only took you 6 turns!"));
    }

    #[test]
    fn malformed_coordinates_are_reprompted() {
        let mut engine = PexesoEngine::new(CardLayout::reference());
        let mut screen = RecordingScreen::default();
        // "z9" is out of range, "1a" is digit-first; both get re-prompted
        let script = "z9\n1a\na1\na2\n\n";
        let mut input = script.as_bytes();

        screen.draw(&engine, WELCOME).unwrap();
        let first = read_coords(&engine, &mut screen, &mut input).unwrap();

        assert_eq!(first, (0, 0));
        assert_eq!(screen.log.matches("Invalid coordinates").count(), 2);
    }

    #[test]
    fn exhausted_input_is_an_error() {
        let mut engine = PexesoEngine::new(CardLayout::reference());
        let mut screen = RecordingScreen::default();
        let mut input = "a1\n".as_bytes();

        let result = game_loop(&mut engine, &mut screen, &mut input);

        assert!(result.is_err());
    }
}
