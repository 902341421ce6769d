use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// A single game from initialization to win or loss.
///
/// The outcome is never stored: it is derived from the triggered hazard (if
/// any) and the number of safe cells still hidden. A restart constructs a
/// fresh `Board`; the previous one is simply dropped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    layout: HazardLayout,
    grid: Array2<Cell>,
    revealed_count: Saturating<CellCount>,
    triggered_hazard: Option<Coord2>,
}

impl Board {
    /// Validates the configuration, runs the placer, and starts with every
    /// cell hidden.
    pub fn initialize<P: HazardPlacer>(size: Coord, hazards: CellCount, placer: P) -> Result<Self> {
        let config = BoardConfig::new(size, hazards)?;
        Ok(Self::new(placer.place(config)))
    }

    pub fn new(layout: HazardLayout) -> Self {
        let size = usize::from(layout.size());
        Self {
            layout,
            grid: Array2::default((size, size)),
            revealed_count: Saturating(0),
            triggered_hazard: None,
        }
    }

    pub fn outcome(&self) -> GameOutcome {
        // A fully-hazarded board has no safe cells to win by revealing; it
        // stays in progress until a hazard is hit.
        if self.triggered_hazard.is_some() {
            GameOutcome::Lost
        } else if self.layout.safe_cell_count() > 0 && self.safe_cells_remaining() == 0 {
            GameOutcome::Won
        } else {
            GameOutcome::InProgress
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_finished()
    }

    pub fn size(&self) -> Coord {
        self.layout.size()
    }

    pub fn hazard_count(&self) -> CellCount {
        self.layout.hazard_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn safe_cells_remaining(&self) -> CellCount {
        self.layout.safe_cell_count().saturating_sub(self.revealed_count.0)
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.grid[coords.to_nd_index()]
    }

    pub fn triggered_hazard(&self) -> Option<Coord2> {
        self.triggered_hazard
    }

    /// Reveals a hidden cell.
    ///
    /// Fails fast with `InvalidCoordinate` or `InvalidState` without touching
    /// the board; side effects only happen while the game is in progress.
    /// Revealing a hazard is terminal; revealing the last safe cell wins.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealResult> {
        let coords = self.layout.validate_coords(coords)?;
        self.check_in_progress()?;

        if !self.grid[coords.to_nd_index()].is_hidden() {
            return Err(GameError::InvalidState);
        }

        let cell = if self.layout.contains_hazard(coords) {
            self.triggered_hazard = Some(coords);
            Cell::Hazard
        } else {
            let adjacent_hazards = self.layout.adjacent_hazard_count(coords);
            self.revealed_count += 1;
            Cell::Revealed(adjacent_hazards)
        };
        self.grid[coords.to_nd_index()] = cell;

        let outcome = self.outcome();
        log::debug!("revealed {:?} as {:?}, outcome {:?}", coords, cell, outcome);
        Ok(RevealResult { cell, outcome })
    }

    fn check_in_progress(&self) -> Result<()> {
        if matches!(self.outcome(), GameOutcome::InProgress) {
            Ok(())
        } else {
            Err(GameError::InvalidState)
        }
    }
}
