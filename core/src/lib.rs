#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;
pub use view::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;
mod view;

/// Validated board parameters: a `size` x `size` grid with `hazards` hazard cells.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord,
    pub hazards: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord, hazards: CellCount) -> Self {
        Self { size, hazards }
    }

    /// Rejects a hazard count outside `[1, size*size]` before any board exists.
    pub fn new(size: Coord, hazards: CellCount) -> Result<Self> {
        if size == 0 {
            return Err(GameError::Configuration);
        }
        if hazards < 1 || hazards > mult(size, size) {
            return Err(GameError::Configuration);
        }
        Ok(Self::new_unchecked(size, hazards))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.hazards)
    }
}

/// Where the hazards are. Fixed at creation and never relocated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HazardLayout {
    hazard_mask: Array2<bool>,
    hazard_count: CellCount,
}

impl HazardLayout {
    /// The mask must be square, non-empty, fit in `Coord`, and contain at
    /// least one hazard.
    pub fn from_hazard_mask(hazard_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = hazard_mask.dim();
        if rows != cols || rows == 0 || rows > usize::from(Coord::MAX) {
            return Err(GameError::Configuration);
        }

        let hazard_count = hazard_mask.iter().filter(|&&is_hazard| is_hazard).count() as CellCount;
        if hazard_count == 0 {
            return Err(GameError::Configuration);
        }

        Ok(Self {
            hazard_mask,
            hazard_count,
        })
    }

    pub fn from_hazard_coords(size: Coord, hazard_coords: &[Coord2]) -> Result<Self> {
        let mut hazard_mask: Array2<bool> =
            Array2::default((usize::from(size), usize::from(size)));

        for &coords in hazard_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::InvalidCoordinate);
            }
            hazard_mask[coords.to_nd_index()] = true;
        }

        Self::from_hazard_mask(hazard_mask)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoordinate)
        }
    }

    pub fn size(&self) -> Coord {
        self.hazard_mask.dim().0.try_into().unwrap()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.hazard_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.hazard_mask.len().try_into().unwrap()
    }

    pub fn hazard_count(&self) -> CellCount {
        self.hazard_count
    }

    pub fn contains_hazard(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Hazards among the up-to-8 in-bounds neighbors. Out-of-range neighbors
    /// are absent from the count, never clamped onto an edge cell.
    pub fn adjacent_hazard_count(&self, coords: Coord2) -> u8 {
        self.hazard_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count()
            .try_into()
            .unwrap()
    }
}

impl Index<Coord2> for HazardLayout {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.hazard_mask[(row as usize, col as usize)]
    }
}

/// Derived win/loss/in-progress status of the whole board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Won,
    Lost,
}

impl GameOutcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameOutcome {
    fn default() -> Self {
        Self::InProgress
    }
}

/// What a successful `reveal` produced: the new cell value and the outcome
/// after the move.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealResult {
    pub cell: Cell,
    pub outcome: GameOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_out_of_range_hazard_counts() {
        assert_eq!(BoardConfig::new(3, 0), Err(GameError::Configuration));
        assert_eq!(BoardConfig::new(3, 10), Err(GameError::Configuration));
        assert_eq!(BoardConfig::new(0, 1), Err(GameError::Configuration));
    }

    #[test]
    fn config_accepts_boundary_hazard_counts() {
        assert!(BoardConfig::new(3, 1).is_ok());
        assert!(BoardConfig::new(3, 9).is_ok());
        assert_eq!(BoardConfig::new(3, 2).unwrap().safe_cells(), 7);
    }

    #[test]
    fn layout_counts_hazards_exactly() {
        let layout = HazardLayout::from_hazard_coords(4, &[(0, 0), (3, 3), (1, 2)]).unwrap();

        assert_eq!(layout.hazard_count(), 3);
        assert_eq!(layout.safe_cell_count(), 13);
        assert!(layout.contains_hazard((1, 2)));
        assert!(!layout.contains_hazard((2, 1)));
    }

    #[test]
    fn layout_rejects_out_of_range_hazard_coords() {
        assert_eq!(
            HazardLayout::from_hazard_coords(3, &[(3, 0)]),
            Err(GameError::InvalidCoordinate)
        );
    }

    #[test]
    fn layout_rejects_non_square_or_empty_masks() {
        let non_square = Array2::from_elem((2, 3), true);
        assert_eq!(
            HazardLayout::from_hazard_mask(non_square),
            Err(GameError::Configuration)
        );

        let no_hazards = Array2::from_elem((2, 2), false);
        assert_eq!(
            HazardLayout::from_hazard_mask(no_hazards),
            Err(GameError::Configuration)
        );
    }

    #[test]
    fn adjacent_count_excludes_out_of_range_neighbors() {
        // Hazard in the corner: only the three in-bounds neighbors see it,
        // and the corner itself is not double counted from the edges.
        let layout = HazardLayout::from_hazard_coords(3, &[(0, 0)]).unwrap();

        assert_eq!(layout.adjacent_hazard_count((0, 1)), 1);
        assert_eq!(layout.adjacent_hazard_count((1, 0)), 1);
        assert_eq!(layout.adjacent_hazard_count((1, 1)), 1);
        assert_eq!(layout.adjacent_hazard_count((0, 2)), 0);
        assert_eq!(layout.adjacent_hazard_count((2, 2)), 0);
    }
}
