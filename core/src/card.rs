use serde::{Deserialize, Serialize};

/// Player-visible state of a single board cell.
///
/// `Down` cells show the hidden placeholder, `Up` cells show their symbol
/// while a match check is pending, and `Locked` cells belong to a found pair
/// and can never be turned face down again.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CardFace {
    Down,
    Up,
    Locked,
}

impl CardFace {
    pub const fn is_down(self) -> bool {
        matches!(self, Self::Down)
    }

    pub const fn is_locked(self) -> bool {
        matches!(self, Self::Locked)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Up | Self::Locked)
    }
}

impl Default for CardFace {
    fn default() -> Self {
        Self::Down
    }
}
