use crate::{FftError, FftResult};
use serde::{Deserialize, Serialize};

/// Scale of the domain built by [`crate::Domain::from_config`]; supports
/// transforms of up to 65536 elements.
const DEFAULT_MAX_SCALE: u8 = 16;

/// Leaves of 63 points give 64-coefficient leaf polynomials, which fill a
/// power-of-two transform exactly.
const DEFAULT_POINTS_PER_LEAF: usize = 63;

const DEFAULT_REDUCTION_FACTOR: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// log2 of the widest supported transform.
    pub max_scale: u8,

    /// Number of missing indices handled by each leaf of the zero
    /// polynomial builder.
    pub points_per_leaf: usize,

    /// Number of leaves merged into one by each call to `reduce_leaves`.
    pub reduction_factor: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_scale: DEFAULT_MAX_SCALE,
            points_per_leaf: DEFAULT_POINTS_PER_LEAF,
            reduction_factor: DEFAULT_REDUCTION_FACTOR,
        }
    }
}

impl Config {
    /// Check the config against a roots of unity table of the given size
    pub fn validate(&self, supported_max_scale: u8) -> FftResult<()> {
        if self.max_scale > supported_max_scale {
            return Err(FftError::InvalidConfig(format!(
                "max_scale {} exceeds the supported maximum {}",
                self.max_scale, supported_max_scale
            )));
        }
        self.validate_leaf_settings()
    }

    /// Check only the settings used by the zero polynomial builder
    pub(crate) fn validate_leaf_settings(&self) -> FftResult<()> {
        if self.points_per_leaf == 0 {
            return Err(FftError::InvalidConfig(
                "points_per_leaf must be positive".to_string(),
            ));
        }
        if self.reduction_factor < 2 {
            return Err(FftError::InvalidConfig(format!(
                "reduction_factor must be at least 2, got {}",
                self.reduction_factor
            )));
        }
        Ok(())
    }
}
