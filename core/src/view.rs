use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read model for a presentation layer: everything a render loop needs for
/// one frame, with no access to the hidden hazard layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: Coord,
    pub hazards: CellCount,
    pub outcome: GameOutcome,
    pub cells: Array2<Cell>,
}

impl BoardSnapshot {
    pub fn from_board(board: &Board) -> Self {
        let size = board.size();
        let n = usize::from(size);
        let cells = Array2::from_shape_fn((n, n), |(row, col)| {
            board.cell_at((row as Coord, col as Coord))
        });

        Self {
            size,
            hazards: board.hazard_count(),
            outcome: board.outcome(),
            cells,
        }
    }
}

impl Cell {
    /// Board character for a cell: blank while hidden, `X` for a revealed
    /// hazard, the digit otherwise.
    pub const fn glyph(self) -> char {
        match self {
            Cell::Hidden => ' ',
            Cell::Hazard => 'X',
            Cell::Revealed(count) => (b'0' + count) as char,
        }
    }
}

impl GameOutcome {
    /// Status line shown above the board.
    pub const fn status_message(self) -> &'static str {
        match self {
            GameOutcome::InProgress => "Select Field",
            GameOutcome::Won => "You Won!",
            GameOutcome::Lost => "You Lost!",
        }
    }
}
