use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// The only transition is `Playing` to `Won`; nothing leaves `Won`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BoardState {
    Playing,
    Won,
}

impl BoardState {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// A single game over a fixed-size grid of lights.
///
/// Every accepted press swaps the grid for the next snapshot in one
/// assignment. The game state is re-derived from the grid on each call
/// instead of being cached alongside it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    grid: LightGrid,
    toggle_count: Saturating<u32>,
}

impl Game {
    pub fn new(grid: LightGrid) -> Self {
        Self {
            grid,
            toggle_count: Saturating(0),
        }
    }

    /// A board generated with every light already off is won from the start.
    pub fn state(&self) -> BoardState {
        if self.grid.is_dark() {
            BoardState::Won
        } else {
            BoardState::Playing
        }
    }

    pub fn has_won(&self) -> bool {
        self.state().is_won()
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn grid(&self) -> &LightGrid {
        &self.grid
    }

    pub fn is_lit(&self, coords: Coord2) -> bool {
        self.grid.is_lit(coords)
    }

    pub fn toggle_count(&self) -> u32 {
        self.toggle_count.0
    }

    /// Presses the light at `coords`, flipping it and its in-bounds
    /// orthogonal neighbors. Pressing outside the board changes nothing.
    pub fn toggle(&mut self, coords: Coord2) -> Result<ToggleOutcome> {
        use ToggleOutcome::*;

        self.check_playing()?;

        if !self.grid.in_bounds(coords) {
            return Ok(NoChange);
        }

        self.grid = self.grid.toggled(coords);
        self.toggle_count += 1;

        if self.grid.is_dark() {
            log::debug!("all lights out after {} presses", self.toggle_count.0);
            Ok(Won)
        } else {
            Ok(Toggled)
        }
    }

    fn check_playing(&self) -> Result<()> {
        if self.has_won() {
            Err(GameError::AlreadyWon)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(size: Coord2, lit: &[Coord2]) -> Game {
        Game::new(LightGrid::from_lit_coords(size, lit).unwrap())
    }

    #[test]
    fn pressing_the_center_of_a_lit_cross_wins() {
        let mut game = game((3, 3), &[(1, 1), (0, 1), (2, 1), (1, 0), (1, 2)]);

        assert_eq!(game.state(), BoardState::Playing);
        assert_eq!(game.toggle((1, 1)).unwrap(), ToggleOutcome::Won);
        assert_eq!(game.state(), BoardState::Won);
        assert_eq!(game.toggle_count(), 1);
    }

    #[test]
    fn ordinary_presses_report_a_toggle() {
        let mut game = game((3, 3), &[(0, 0)]);

        assert_eq!(game.toggle((2, 2)).unwrap(), ToggleOutcome::Toggled);
        assert_eq!(game.toggle_count(), 1);
        assert!(game.is_lit((0, 0)));
    }

    #[test]
    fn won_games_accept_no_further_presses() {
        let mut game = game((2, 2), &[(1, 1), (0, 1), (1, 0)]);

        assert_eq!(game.toggle((1, 1)).unwrap(), ToggleOutcome::Won);
        assert_eq!(game.toggle((0, 0)), Err(GameError::AlreadyWon));
        assert!(game.grid().is_dark());
        assert_eq!(game.toggle_count(), 1);
    }

    #[test]
    fn all_dark_board_is_won_before_any_press() {
        let mut game = Game::new(LightGrid::dark((4, 4)));

        assert!(game.has_won());
        assert_eq!(game.toggle((0, 0)), Err(GameError::AlreadyWon));
    }

    #[test]
    fn out_of_bounds_presses_are_ignored() {
        let mut game = game((2, 2), &[(0, 1)]);
        let before = game.grid().clone();

        assert_eq!(game.toggle((7, 0)).unwrap(), ToggleOutcome::NoChange);
        assert_eq!(game.grid(), &before);
        assert_eq!(game.toggle_count(), 0);
    }
}
