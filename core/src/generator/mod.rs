use crate::*;
pub use shuffle::*;

mod shuffle;

/// Symbols a generated board draws from, classic glyphs first. Supports
/// boards of up to `SYMBOL_SET.len()` pairs.
pub const SYMBOL_SET: &[Symbol] = &[
    '$', '@', '+', 'O', '#', '&', '%', '=', '*', '!', '~', '^', '<', '>', '8', 'X', 'V', 'Z',
];

pub trait LayoutGenerator {
    fn generate(self, config: GameConfig) -> Result<CardLayout>;
}
