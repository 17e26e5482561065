use ndarray::Array2;

use super::*;

/// Seeded generation strategy: draws one uniform sample per cell and
/// compares it against `light_chance`, interpreted per the start policy.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomGridGenerator {
    seed: u64,
    policy: StartPolicy,
}

impl RandomGridGenerator {
    pub fn new(seed: u64, policy: StartPolicy) -> Self {
        Self { seed, policy }
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(self, config: GameConfig) -> LightGrid {
        use rand::prelude::*;
        use StartPolicy::*;

        let chance = config.light_chance;
        if !(0.0..=1.0).contains(&chance) {
            log::warn!(
                "light chance {} outside [0, 1], generated anyway, treating it as {}",
                chance,
                if chance > 1.0 { "1" } else { "0" }
            );
        }

        let (nrows, ncols) = config.size;
        let mut rng = SmallRng::seed_from_u64(self.seed);

        match self.policy {
            Independent => {
                let mut lights: Array2<bool> = Array2::default(config.size.to_nd_index());
                for row in 0..nrows {
                    for col in 0..ncols {
                        lights[(row, col).to_nd_index()] = rng.random::<f64>() < chance;
                    }
                }
                LightGrid::from_light_mask(lights)
            }
            Solvable => {
                let mut grid = LightGrid::dark(config.size);
                for row in 0..nrows {
                    for col in 0..ncols {
                        if rng.random::<f64>() < chance {
                            grid = grid.toggled((row, col));
                        }
                    }
                }
                grid
            }
        }
    }
}
