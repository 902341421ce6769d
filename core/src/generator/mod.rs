use crate::*;
pub use random::*;

mod random;

/// Strategy for choosing hazard positions. Injected into board
/// initialization so tests can force deterministic layouts.
pub trait HazardPlacer {
    fn place(self, config: BoardConfig) -> HazardLayout;
}
