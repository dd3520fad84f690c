use serde::Deserialize;
use thiserror::Error;

use crate::core::fractals::lyapunov::algorithm::SENTINEL;

pub const DEFAULT_GAMMA: f64 = 1.2;
pub const DEFAULT_STEEPNESS: f64 = 7.0;
pub const DEFAULT_VALIDITY_THRESHOLD: f64 = -4.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NormalizeSettingsError {
    #[error("gamma must be positive and finite, got {0}")]
    InvalidGamma(f64),
    #[error("steepness must be finite, got {0}")]
    InvalidSteepness(f64),
    #[error("validity threshold must be finite and at least the sampling sentinel {SENTINEL}, got {0}")]
    InvalidThreshold(f64),
}

/// Presentation tuning for the display curve. The defaults reproduce the
/// reference rendering.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct NormalizeSettings {
    /// Power-law exponent applied to the rescaled value.
    pub gamma: f64,
    /// Slope of the logistic stretch around 0.5.
    pub steepness: f64,
    /// Samples at or below this value count as missing. Never below
    /// [`SENTINEL`], so sentinel samples are always missing.
    pub validity_threshold: f64,
}

impl Default for NormalizeSettings {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            steepness: DEFAULT_STEEPNESS,
            validity_threshold: DEFAULT_VALIDITY_THRESHOLD,
        }
    }
}

impl NormalizeSettings {
    pub fn new(gamma: f64, steepness: f64, validity_threshold: f64) -> Result<Self, NormalizeSettingsError> {
        let settings = Self {
            gamma,
            steepness,
            validity_threshold,
        };
        settings.validate()?;

        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), NormalizeSettingsError> {
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(NormalizeSettingsError::InvalidGamma(self.gamma));
        }
        if !self.steepness.is_finite() {
            return Err(NormalizeSettingsError::InvalidSteepness(self.steepness));
        }
        if !self.validity_threshold.is_finite() || self.validity_threshold < SENTINEL {
            return Err(NormalizeSettingsError::InvalidThreshold(self.validity_threshold));
        }

        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn is_valid_sample(&self, value: f64) -> bool {
        value.is_finite() && value > self.validity_threshold.max(SENTINEL)
    }

    /// Gamma followed by the logistic stretch, for `t` in `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn shape(&self, t: f64) -> f64 {
        let s = t.powf(self.gamma);
        1.0 / (1.0 + (-self.steepness * (s - 0.5)).exp())
    }
}
