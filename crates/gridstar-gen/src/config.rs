//! Generator configuration.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::mapgen::{GenError, GridGen, Scenario};

/// Parameters for a generated scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenConfig {
    pub rows: i32,
    pub cols: i32,
    pub obstacles: usize,
    /// Fixed seed for reproducible output. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            obstacles: 7,
            seed: None,
        }
    }
}

impl GenConfig {
    /// A generator seeded according to [`seed`](Self::seed).
    pub fn grid_gen(&self) -> GridGen<StdRng> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        GridGen::new(rng)
    }

    /// Generate one scenario from this configuration.
    pub fn generate(&self) -> Result<Scenario, GenError> {
        self.grid_gen().generate(self.rows, self.cols, self.obstacles)
    }
}
