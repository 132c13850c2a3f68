use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::grid::CellCoord;
use crate::grid::Grid;
use crate::rule_set::RuleSet;

pub const DEFAULT_WIDTH: i64 = 50;
pub const DEFAULT_HEIGHT: i64 = 50;
pub const DEFAULT_DELAY_MS: i64 = 100;

/// Most cells a grid may hold, about 16 MB of cell buffer
pub const MAX_CELLS: usize = 1 << 24;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Width must be positive, got {got}")]
    NonPositiveWidth { got: i64 },

    #[error("Height must be positive, got {got}")]
    NonPositiveHeight { got: i64 },

    #[error("Delay must be non-negative, got {got}")]
    NegativeDelay { got: i64 },

    #[error("A {width}x{height} grid is too large, at most {} cells are allowed", MAX_CELLS)]
    TooLarge { width: i64, height: i64 },
}

/// Validated construction parameters. Holding a `Config` means every value is in range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub width: CellCoord,
    pub height: CellCoord,
    pub delay: Duration,

    /// Seed for a random initial pattern. `None` starts with every cell dead.
    pub seed: Option<u64>,

    pub rule: RuleSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH as CellCoord,
            height: DEFAULT_HEIGHT as CellCoord,
            delay: Duration::from_millis(DEFAULT_DELAY_MS as u64),
            seed: None,
            rule: RuleSet::default(),
        }
    }
}

impl Config {
    /// Validate raw, user provided dimensions (in cells) and delay (in milliseconds)
    pub fn new(width: i64, height: i64, delay_ms: i64) -> Result<Self, ConfigError> {
        if width <= 0 {
            return Err(ConfigError::NonPositiveWidth { got: width });
        }

        if height <= 0 {
            return Err(ConfigError::NonPositiveHeight { got: height });
        }

        if delay_ms < 0 {
            return Err(ConfigError::NegativeDelay { got: delay_ms });
        }

        let too_large = ConfigError::TooLarge { width, height };
        let w = CellCoord::try_from(width).map_err(|_| too_large.clone())?;
        let h = CellCoord::try_from(height).map_err(|_| too_large.clone())?;
        match w.checked_mul(h) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => return Err(too_large),
        }

        Ok(Self {
            width: w,
            height: h,
            delay: Duration::from_millis(delay_ms as u64),
            ..Self::default()
        })
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_rule(mut self, rule: RuleSet) -> Self {
        self.rule = rule;
        self
    }

    /// The first generation: empty, or random if a seed was given
    pub fn initial_grid(&self) -> Grid {
        match self.seed {
            None => Grid::new(self.width, self.height),
            Some(seed) => Grid::random(self.width, self.height, &mut StdRng::seed_from_u64(seed)),
        }
    }
}
