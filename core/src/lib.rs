#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub light_chance: f64,
}

impl GameConfig {
    /// Values are stored as given. A zero-area board starts with every
    /// cell dark, which already counts as won, and a `light_chance`
    /// outside `[0, 1]` behaves like 0 or 1.
    pub const fn new(size: Coord2, light_chance: f64) -> Self {
        Self { size, light_chance }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new((2, 2), 0.5)
    }
}

/// On/off state of every light on the board, `true` meaning lit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightGrid {
    lights: Array2<bool>,
}

impl LightGrid {
    pub fn from_light_mask(lights: Array2<bool>) -> Self {
        Self { lights }
    }

    /// A board of the given size with every light off.
    pub fn dark(size: Coord2) -> Self {
        Self::from_light_mask(Array2::default(size.to_nd_index()))
    }

    pub fn from_lit_coords(size: Coord2, lit_coords: &[Coord2]) -> Result<Self> {
        let mut lights: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in lit_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            lights[coords.to_nd_index()] = true;
        }

        Ok(Self::from_light_mask(lights))
    }

    pub fn from_rows(rows: &[&[bool]]) -> Result<Self> {
        let ncols = rows.first().map_or(0, |row| row.len());
        if rows.iter().any(|row| row.len() != ncols) {
            return Err(GameError::RaggedRows);
        }

        let cells: Vec<bool> = rows.iter().flat_map(|row| row.iter().copied()).collect();
        let lights = Array2::from_shape_vec((rows.len(), ncols), cells)
            .map_err(|_| GameError::RaggedRows)?;
        Ok(Self::from_light_mask(lights))
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.lights.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.lights.len().try_into().unwrap()
    }

    pub fn lit_count(&self) -> CellCount {
        self.lights
            .iter()
            .filter(|&&lit| lit)
            .count()
            .try_into()
            .unwrap()
    }

    pub fn in_bounds(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    pub fn is_lit(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Whether every light is off. Stops scanning at the first lit cell.
    pub fn is_dark(&self) -> bool {
        !self.lights.iter().any(|&lit| lit)
    }

    /// The board after pressing `center`: the pressed cell and its four
    /// orthogonal neighbors flip, with positions past the edge skipped.
    /// `self` is left untouched.
    #[must_use]
    pub fn toggled(&self, center: Coord2) -> Self {
        let mut next = self.clone();
        for coords in CrossIter::new(center, self.size()) {
            let idx = coords.to_nd_index();
            next.lights[idx] = !next.lights[idx];
        }
        next
    }
}

impl Index<Coord2> for LightGrid {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.lights[(row as usize, col as usize)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ToggleOutcome {
    NoChange,
    Toggled,
    Won,
}

impl ToggleOutcome {
    pub const fn has_update(self) -> bool {
        use ToggleOutcome::*;
        match self {
            NoChange => false,
            Toggled => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: bool = true;
    const F: bool = false;

    #[test]
    fn toggled_flips_the_cross_and_nothing_else() {
        let grid = LightGrid::dark((4, 5)).toggled((2, 1));

        for row in 0..4 {
            for col in 0..5 {
                let expect_lit = matches!((row, col), (2, 1) | (3, 1) | (1, 1) | (2, 2) | (2, 0));
                assert_eq!(grid.is_lit((row, col)), expect_lit, "at ({row}, {col})");
            }
        }
        assert_eq!(grid.lit_count(), 5);
    }

    #[test]
    fn toggled_in_a_corner_flips_three_cells() {
        let grid = LightGrid::dark((3, 3)).toggled((0, 0));

        assert_eq!(grid.lit_count(), 3);
        assert!(grid.is_lit((0, 0)));
        assert!(grid.is_lit((1, 0)));
        assert!(grid.is_lit((0, 1)));
    }

    #[test]
    fn toggled_is_its_own_inverse() {
        let grid = LightGrid::from_lit_coords((3, 4), &[(0, 3), (1, 1), (2, 2)]).unwrap();

        assert_eq!(grid.toggled((1, 2)).toggled((1, 2)), grid);
    }

    #[test]
    fn toggled_leaves_the_receiver_untouched() {
        let grid = LightGrid::dark((3, 3));
        let _ = grid.toggled((1, 1));

        assert!(grid.is_dark());
    }

    #[test]
    fn toggling_a_lit_cross_turns_every_light_off() {
        let grid = LightGrid::from_rows(&[
            &[F, T, F],
            &[T, T, T],
            &[F, T, F],
        ])
        .unwrap();

        assert!(grid.toggled((1, 1)).is_dark());
    }

    #[test]
    fn is_dark_spots_a_single_lit_cell_anywhere() {
        for size in 1..=10 {
            assert!(LightGrid::dark((size, size)).is_dark());

            let last = size - 1;
            let grid = LightGrid::from_lit_coords((size, size), &[(last, last)]).unwrap();
            assert!(!grid.is_dark());
        }
    }

    #[test]
    fn lit_coords_out_of_bounds_are_rejected() {
        assert_eq!(
            LightGrid::from_lit_coords((2, 2), &[(0, 0), (2, 1)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert_eq!(
            LightGrid::from_rows(&[&[T, F], &[T]]),
            Err(GameError::RaggedRows)
        );
    }

    #[test]
    fn default_config_is_a_two_by_two_coin_flip() {
        let config = GameConfig::default();

        assert_eq!(config.size, (2, 2));
        assert_eq!(config.light_chance, 0.5);
        assert_eq!(config.total_cells(), 4);
    }
}
