use ndarray::Array2;

use super::*;

/// Uniformly random placement by rejection sampling: draw a cell, redraw on
/// collision, until the requested number of distinct hazards is set.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomHazardPlacer {
    seed: u64,
}

impl RandomHazardPlacer {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl HazardPlacer for RandomHazardPlacer {
    fn place(self, config: BoardConfig) -> HazardLayout {
        use rand::prelude::*;

        let size = usize::from(config.size);
        let mut hazard_mask: Array2<bool> = Array2::default((size, size));
        let mut placed: CellCount = 0;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        while placed < config.hazards {
            let row = rng.random_range(0..size);
            let col = rng.random_range(0..size);

            let cell = &mut hazard_mask[(row, col)];
            if !*cell {
                *cell = true;
                placed += 1;
            }
        }

        log::debug!(
            "placed {} hazards on a {}x{} board (seed {})",
            placed,
            config.size,
            config.size,
            self.seed
        );
        HazardLayout {
            hazard_mask,
            hazard_count: placed,
        }
    }
}
