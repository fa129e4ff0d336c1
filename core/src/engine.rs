use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    Ready,
    Active,
    Won,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Ready
    }
}

/// Pure match check between two card symbols.
pub const fn matches(a: Symbol, b: Symbol) -> bool {
    a == b
}

/// Holds one game of pexeso: the solution layout, the face-up/face-down state
/// of every cell, and the found-pairs and turn counters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PexesoEngine {
    layout: CardLayout,
    board: Array2<CardFace>,
    pairs_found: CellCount,
    turns: CellCount,
    state: EngineState,
}

impl PexesoEngine {
    pub fn new(layout: CardLayout) -> Self {
        let size = layout.size();
        Self {
            layout,
            board: Array2::default(size.to_nd_index()),
            pairs_found: 0,
            turns: 0,
            state: Default::default(),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.layout.size()
    }

    pub fn pair_count(&self) -> CellCount {
        self.layout.pair_count()
    }

    pub fn pairs_found(&self) -> CellCount {
        self.pairs_found
    }

    pub fn pairs_left(&self) -> CellCount {
        self.layout.pair_count() - self.pairs_found
    }

    pub fn turns(&self) -> CellCount {
        self.turns
    }

    pub fn face_at(&self, coords: Coord2) -> CardFace {
        self.board[coords.to_nd_index()]
    }

    /// The symbol a renderer should show at `coords`, `None` while the cell
    /// is face down.
    pub fn visible_symbol(&self, coords: Coord2) -> Option<Symbol> {
        self.face_at(coords)
            .is_revealed()
            .then(|| self.layout[coords])
    }

    pub fn is_locked(&self, coords: Coord2) -> bool {
        self.face_at(coords).is_locked()
    }

    /// Turns the cell face up and returns its solution symbol. Revealing an
    /// already face-up or locked cell is a no-op that still returns the
    /// symbol, so a player picking the same cell twice sees stable output.
    pub fn reveal(&mut self, coords: Coord2) -> Result<Symbol> {
        let coords = self.layout.validate_coords(coords)?;
        self.check_not_finished()?;

        if self.face_at(coords).is_down() {
            self.board[coords.to_nd_index()] = CardFace::Up;
        }
        self.mark_started();

        Ok(self.layout[coords])
    }

    /// Turns a pending cell back face down. Locked cells stay revealed.
    pub fn hide(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.layout.validate_coords(coords)?;
        Ok(self.hide_cell(coords))
    }

    /// Locks a cell so it can never be hidden again. Idempotent.
    pub fn lock(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.layout.validate_coords(coords)?;
        Ok(self.lock_cell(coords))
    }

    /// Resolves one round after its two reveals, applying the match rules and
    /// bumping the turn counter regardless of the outcome.
    ///
    /// A matching pair is locked and counted once; re-picking an already
    /// locked pair re-locks it without scoring, which keeps the found-pairs
    /// counter honest. Picking the same cell for both reveals counts as a
    /// match under the compare-by-value semantics.
    pub fn resolve_round(&mut self, first: Coord2, second: Coord2) -> Result<RoundOutcome> {
        use RoundOutcome::*;

        let first = self.layout.validate_coords(first)?;
        let second = self.layout.validate_coords(second)?;
        self.check_not_finished()?;
        self.mark_started();

        self.turns += 1;

        if matches(self.layout[first], self.layout[second]) {
            let fresh = !self.is_locked(first) && !self.is_locked(second);
            self.lock_cell(first);
            self.lock_cell(second);

            if !fresh {
                log::warn!("pair at {first:?}/{second:?} was already matched, not scored");
                return Ok(AlreadyMatched);
            }

            self.pairs_found += 1;
            log::debug!(
                "pair {:?} found at {first:?}/{second:?}, {} left",
                self.layout[first],
                self.pairs_left()
            );

            if self.pairs_found == self.layout.pair_count() {
                self.state = EngineState::Won;
                Ok(Won)
            } else {
                Ok(Matched)
            }
        } else {
            self.hide_cell(first);
            self.hide_cell(second);
            Ok(NoMatch)
        }
    }

    fn hide_cell(&mut self, coords: Coord2) -> MarkOutcome {
        match self.face_at(coords) {
            CardFace::Up => {
                self.board[coords.to_nd_index()] = CardFace::Down;
                MarkOutcome::Changed
            }
            CardFace::Down | CardFace::Locked => MarkOutcome::NoChange,
        }
    }

    fn lock_cell(&mut self, coords: Coord2) -> MarkOutcome {
        if self.face_at(coords).is_locked() {
            MarkOutcome::NoChange
        } else {
            self.board[coords.to_nd_index()] = CardFace::Locked;
            MarkOutcome::Changed
        }
    }

    fn mark_started(&mut self) {
        if self.state.is_ready() {
            self.state = EngineState::Active;
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
