use crate::*;
pub use random::*;

mod random;

/// Produces the starting grid for a game. Randomness is injected through
/// the generator value itself so callers can pin a seed.
pub trait GridGenerator {
    fn generate(self, config: GameConfig) -> LightGrid;
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StartPolicy {
    /// Light each cell independently with probability `light_chance`.
    /// Boards made this way are not guaranteed to be solvable.
    Independent,
    /// Start from an all-dark board and press random cells, so the board
    /// can always be solved by replaying those presses. `light_chance`
    /// acts as the press density instead of the lit probability.
    Solvable,
}
