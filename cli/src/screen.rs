use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use pexeso_core::PexesoEngine;
use std::io::{self, Stdout, Write};

/// Placeholder glyph for face-down cells.
pub const HIDDEN_GLYPH: char = '?';

/// Display capability the game loop renders through, so the loop itself
/// never touches a concrete terminal.
pub trait Screen {
    /// Wipes the display before a redraw.
    fn clear(&mut self) -> io::Result<()>;

    /// Writes one full line.
    fn line(&mut self, text: &str) -> io::Result<()>;

    /// Writes an input prompt, leaving the cursor on the same line.
    fn prompt(&mut self, text: &str) -> io::Result<()>;

    /// Redraws the whole game view: status message, blank line, board.
    fn draw(&mut self, engine: &PexesoEngine, message: &str) -> io::Result<()> {
        self.clear()?;
        self.line(message)?;
        self.line("")?;
        for row in format_board(engine) {
            self.line(&row)?;
        }
        self.line("")
    }
}

/// Renders the visible grid row-major, framed by the battleship column
/// digits and row letters the input prompt speaks in.
pub fn format_board(engine: &PexesoEngine) -> Vec<String> {
    let (cols, rows) = engine.size();
    let mut lines = Vec::with_capacity(usize::from(rows) + 1);

    let mut header = String::from("  ");
    for x in 0..cols {
        header.push_str(&format!("  {} ", x + 1));
    }
    lines.push(header);

    for y in 0..rows {
        let mut line = String::new();
        line.push((b'A' + y) as char);
        line.push(' ');
        for x in 0..cols {
            let glyph = engine.visible_symbol((x, y)).unwrap_or(HIDDEN_GLYPH);
            line.push_str(&format!(" [{glyph}]"));
        }
        lines.push(line);
    }

    lines
}

/// Crossterm-backed terminal, clearing the screen in-process instead of
/// shelling out to `clear`/`cls`.
pub struct TerminalScreen {
    out: Stdout,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Screen for TerminalScreen {
    fn clear(&mut self) -> io::Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pexeso_core::CardLayout;

    #[test]
    fn board_renders_hidden_and_revealed_cells() {
        let mut engine = PexesoEngine::new(CardLayout::reference());
        engine.reveal((0, 0)).unwrap();

        let lines = format_board(&engine);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "    1   2   3   4 ");
        assert_eq!(lines[1], "A  [$] [?] [?] [?]");
        assert_eq!(lines[2], "B  [?] [?] [?] [?]");
    }
}
