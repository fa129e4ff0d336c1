use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Index;

pub use card::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

pub mod caseflip;
pub mod cipher;

mod card;
mod engine;
mod error;
mod generator;
mod types;

/// The hand-laid 4x3 board of the classic game, row-major.
pub const REFERENCE_SYMBOLS: [Symbol; 12] = [
    '$', '$', '@', '+', //
    '@', 'O', '#', '&', //
    '&', '+', '#', 'O',
];

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2) -> Self {
        Self { size }
    }

    pub fn new((size_x, size_y): Coord2) -> Self {
        let size_x = size_x.clamp(1, Coord::MAX);
        let size_y = size_y.clamp(1, Coord::MAX);
        Self::new_unchecked((size_x, size_y))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// How many pairs a full board holds. Only meaningful for even cell
    /// totals; layout construction rejects odd boards.
    pub const fn pair_count(&self) -> CellCount {
        self.total_cells() / 2
    }
}

/// The solution grid: which symbol hides under every cell. Immutable once
/// constructed, with every symbol occurring exactly twice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardLayout {
    cards: Array2<Symbol>,
    pair_count: CellCount,
}

impl CardLayout {
    /// Builds a layout from row-major symbols, so that the symbol for
    /// `(x, y)` sits at index `x + y * cols`.
    pub fn from_symbols(size: Coord2, symbols: &[Symbol]) -> Result<Self> {
        let config = GameConfig::new_unchecked(size);
        if symbols.len() != usize::from(config.total_cells()) || symbols.len() % 2 != 0 {
            return Err(GameError::InvalidBoardShape);
        }

        let mut occurrences: BTreeMap<Symbol, u32> = BTreeMap::new();
        for &symbol in symbols {
            *occurrences.entry(symbol).or_default() += 1;
        }
        if occurrences.values().any(|&count| count != 2) {
            return Err(GameError::UnpairedSymbol);
        }

        let cols = usize::from(size.0);
        let mut cards: Array2<Symbol> = Array2::from_elem(size.to_nd_index(), ' ');
        for (i, &symbol) in symbols.iter().enumerate() {
            cards[[i % cols, i / cols]] = symbol;
        }

        Ok(Self {
            cards,
            pair_count: occurrences.len() as CellCount,
        })
    }

    /// The classic hand-laid board, for players who want the fixed deal.
    pub fn reference() -> Self {
        Self::from_symbols((4, 3), &REFERENCE_SYMBOLS).expect("reference layout is well formed")
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cards.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.cards.len().try_into().unwrap()
    }

    pub fn pair_count(&self) -> CellCount {
        self.pair_count
    }

    pub fn symbol_at(&self, coords: Coord2) -> Symbol {
        self[coords]
    }
}

impl Index<Coord2> for CardLayout {
    type Output = Symbol;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.cards[(x as usize, y as usize)]
    }
}

/// Outcome of a board mutation that either took effect or was a no-op.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Outcome of resolving the two reveals of one round.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RoundOutcome {
    /// Symbols differ; both cells went back face down.
    NoMatch,
    /// A fresh pair was found and locked.
    Matched,
    /// The symbols match but the pair had been found before; nothing scored.
    AlreadyMatched,
    /// The fresh pair was the last one.
    Won,
}

impl RoundOutcome {
    pub const fn is_match(self) -> bool {
        use RoundOutcome::*;
        match self {
            NoMatch => false,
            Matched => true,
            AlreadyMatched => true,
            Won => true,
        }
    }

    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won)
    }
}
