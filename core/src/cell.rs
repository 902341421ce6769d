use serde::{Deserialize, Serialize};

/// Player-visible state of a single board cell.
///
/// `Revealed` carries the adjacent hazard count (0..=8); `Hazard` is a
/// revealed hazard and is terminal for the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Hidden,
    Revealed(u8),
    Hazard,
}

impl Cell {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Hidden
    }
}
