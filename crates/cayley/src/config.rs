//! Run parameters for BFS and the dead-end scan.
//!
//! Defaults mirror the interactive explorer: radius 3 for plain balls,
//! `R = 7`, `depth_cap = 6`, ten printed examples for dead ends.

use crate::error::ConfigError;

/// Ball builder configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BallCfg {
    pub radius: usize,
    /// Append formal inverses of the declared generators (when the algebra
    /// knows them and they are not already declared).
    pub symmetrize: bool,
}

impl Default for BallCfg {
    fn default() -> Self {
        Self {
            radius: 3,
            symmetrize: false,
        }
    }
}

impl BallCfg {
    pub fn new(radius: usize) -> Self {
        Self {
            radius,
            symmetrize: false,
        }
    }

    pub fn symmetrized(mut self) -> Self {
        self.symmetrize = true;
        self
    }
}

/// Dead-end scan configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeadEndCfg {
    /// Sphere under inspection.
    pub radius: usize,
    /// Longest escape word tried per dead end.
    pub depth_cap: usize,
    /// Display only: how many records a reporter prints (0 = all).
    pub max_examples: usize,
}

impl Default for DeadEndCfg {
    fn default() -> Self {
        Self {
            radius: 7,
            depth_cap: 6,
            max_examples: 10,
        }
    }
}

impl DeadEndCfg {
    pub fn new(radius: usize, depth_cap: usize) -> Self {
        Self {
            radius,
            depth_cap,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth_cap == 0 {
            return Err(ConfigError::ZeroDepthCap);
        }
        // The scan also reports censored depths as `depth_cap + 1`.
        self.radius
            .checked_add(self.depth_cap)
            .and_then(|r| r.checked_add(1))
            .map(|_| ())
            .ok_or(ConfigError::DepthCapTooLarge {
                radius: self.radius,
                depth_cap: self.depth_cap,
            })
    }

    /// Radius the supporting ball has to be built to; saturates on configs
    /// that `validate` rejects.
    pub fn ball_radius(&self) -> usize {
        self.radius.saturating_add(self.depth_cap)
    }
}

/// Convert a user-supplied signed radius, rejecting negatives.
pub fn checked_radius(radius: i64) -> Result<usize, ConfigError> {
    usize::try_from(radius).map_err(|_| ConfigError::NegativeRadius { radius })
}
