//! Configuration of an exploration.

use crate::{structures::cell::Cell, types::err::ConfigError};

/// Default and boundary values.
pub mod defaults {
    /// The smallest accepted world --- anything smaller has nowhere to place hazards.
    pub const MIN_DIMENSION: usize = 2;

    /// The largest accepted world.
    ///
    /// Conventional rather than inherent: the bound matches the range the traversal policy has been exercised on.
    pub const MAX_DIMENSION: usize = 20;

    pub const SEED: u64 = 0;
}

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The width (and height) of the square world.
    pub dimension: usize,

    /// The cell each traversal attempt begins from.
    pub start: Cell,

    /// The cell the agent searches for.
    pub goal: Cell,

    /// The seed for hazard placement.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dimension: 4,
            start: Cell::new(0, 0),
            goal: Cell::new(3, 3),
            seed: defaults::SEED,
        }
    }
}

impl Config {
    /// The number of top-level traversal attempts made before exploration is abandoned.
    pub fn attempt_bound(&self) -> usize {
        self.dimension * self.dimension
    }

    /// Checks the configuration describes a supported world with the start and goal inside it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(defaults::MIN_DIMENSION..=defaults::MAX_DIMENSION).contains(&self.dimension) {
            return Err(ConfigError::DimensionBound);
        }

        if self.start.x >= self.dimension || self.start.y >= self.dimension {
            return Err(ConfigError::StartBeyondBounds);
        }

        if self.goal.x >= self.dimension || self.goal.y >= self.dimension {
            return Err(ConfigError::GoalBeyondBounds);
        }

        Ok(())
    }
}
