use serde::Deserialize;

use crate::core::data::forcing_sequence::{ForcingSequence, ForcingSequenceError};
use crate::core::data::grid_size::{GridSize, GridSizeError};
use crate::core::data::parameter_rect::{ParameterRect, ParameterRectError};
use crate::core::fractals::lyapunov::errors::LyapunovParamsError;

pub const DEFAULT_MIN_X: f64 = 0.0;
pub const DEFAULT_MAX_X: f64 = 4.0;
pub const DEFAULT_MIN_Y: f64 = 0.0;
pub const DEFAULT_MAX_Y: f64 = 4.0;
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_SEQUENCE: &str = "ABABABAB";
pub const DEFAULT_ITERATIONS: u32 = 10_000;
pub const DEFAULT_WARMUP: u32 = 100;

/// Configuration of a single field computation.
///
/// Absent fields in a deserialized record fall back to the defaults above.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LyapunovParams {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub width: u32,
    pub height: u32,
    pub sequence: String,
    /// Exponent-accumulating steps.
    pub iterations: u32,
    /// Discarded transient steps before accumulation.
    pub warmup: u32,
}

impl Default for LyapunovParams {
    fn default() -> Self {
        Self {
            min_x: DEFAULT_MIN_X,
            max_x: DEFAULT_MAX_X,
            min_y: DEFAULT_MIN_Y,
            max_y: DEFAULT_MAX_Y,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            sequence: DEFAULT_SEQUENCE.to_string(),
            iterations: DEFAULT_ITERATIONS,
            warmup: DEFAULT_WARMUP,
        }
    }
}

impl LyapunovParams {
    pub fn grid_size(&self) -> Result<GridSize, GridSizeError> {
        GridSize::new(self.width, self.height)
    }

    pub fn parameter_rect(&self) -> Result<ParameterRect, ParameterRectError> {
        ParameterRect::new(self.min_x, self.max_x, self.min_y, self.max_y)
    }

    pub fn forcing_sequence(&self) -> Result<ForcingSequence, ForcingSequenceError> {
        ForcingSequence::new(&self.sequence)
    }

    /// Length of the forcing lookup: warmup plus accumulation steps.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.warmup as usize + self.iterations as usize
    }

    /// Strict checks run before a full computation: at least two samples per
    /// axis and a viewport with positive extent, on top of the structural
    /// checks the sampler itself needs.
    pub fn validate(&self) -> Result<(), LyapunovParamsError> {
        let grid_size = self.grid_size()?;
        let parameter_rect = self.parameter_rect()?;
        self.forcing_sequence()?;

        if grid_size.width() < 2 || grid_size.height() < 2 {
            return Err(LyapunovParamsError::TooFewSamples {
                width: grid_size.width(),
                height: grid_size.height(),
            });
        }

        if parameter_rect.is_degenerate() {
            return Err(LyapunovParamsError::DegenerateViewport {
                width: parameter_rect.width(),
                height: parameter_rect.height(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = LyapunovParams::default();

        assert_eq!(params.min_x, 0.0);
        assert_eq!(params.max_x, 4.0);
        assert_eq!(params.min_y, 0.0);
        assert_eq!(params.max_y, 4.0);
        assert_eq!(params.width, 800);
        assert_eq!(params.height, 600);
        assert_eq!(params.sequence, "ABABABAB");
        assert_eq!(params.iterations, 10_000);
        assert_eq!(params.warmup, 100);
        assert_eq!(params.total_steps(), 10_100);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_narrow_grid() {
        let params = LyapunovParams {
            width: 1,
            ..Default::default()
        };

        assert_eq!(
            params.validate(),
            Err(LyapunovParamsError::TooFewSamples { width: 1, height: 600 })
        );
    }

    #[test]
    fn test_validate_rejects_zero_height() {
        let params = LyapunovParams {
            height: 0,
            ..Default::default()
        };

        assert_eq!(
            params.validate(),
            Err(LyapunovParamsError::GridSize(GridSizeError::InvalidSize {
                width: 800,
                height: 0
            }))
        );
    }

    #[test]
    fn test_validate_rejects_empty_sequence() {
        let params = LyapunovParams {
            sequence: String::new(),
            ..Default::default()
        };

        assert_eq!(
            params.validate(),
            Err(LyapunovParamsError::Sequence(ForcingSequenceError::Empty))
        );
    }

    #[test]
    fn test_validate_rejects_unknown_symbol() {
        let params = LyapunovParams {
            sequence: "ABC".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            params.validate(),
            Err(LyapunovParamsError::Sequence(ForcingSequenceError::InvalidSymbol { symbol: 'C', position: 2 }))
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_axis() {
        let params = LyapunovParams {
            min_y: 3.0,
            max_y: 2.0,
            ..Default::default()
        };

        assert!(matches!(
            params.validate(),
            Err(LyapunovParamsError::ParameterRect(ParameterRectError::InvalidSize { .. }))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_extent_axis() {
        let params = LyapunovParams {
            min_x: 2.5,
            max_x: 2.5,
            ..Default::default()
        };

        assert_eq!(
            params.validate(),
            Err(LyapunovParamsError::DegenerateViewport { width: 0.0, height: 4.0 })
        );
    }

    #[test]
    fn test_validate_allows_zero_iterations_and_warmup() {
        let params = LyapunovParams {
            iterations: 0,
            warmup: 0,
            ..Default::default()
        };

        assert!(params.validate().is_ok());
        assert_eq!(params.total_steps(), 0);
    }
}
