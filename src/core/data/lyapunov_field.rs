use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LyapunovFieldError {
    #[error("grid size {grid_size} does not match data length {data_len}")]
    BoundsMismatch { grid_size: usize, data_len: usize },
}

pub type LyapunovFieldData = Vec<f64>;

/// Row-major grid of per-sample values, index `row * width + column`.
///
/// Holds either raw exponents (bits per iteration, with the sampling
/// sentinel for missing data) or their normalized `[0, 1]` display values.
#[derive(Debug, Clone, PartialEq)]
pub struct LyapunovField {
    size: GridSize,
    values: LyapunovFieldData,
}

impl LyapunovField {
    pub fn from_data(size: GridSize, values: LyapunovFieldData) -> Result<Self, LyapunovFieldError> {
        if size.len() != values.len() {
            return Err(LyapunovFieldError::BoundsMismatch {
                grid_size: size.len(),
                data_len: values.len(),
            });
        }

        Ok(Self { size, values })
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn get(&self, point: Point) -> Option<f64> {
        self.size.index_of(point).map(|index| self.values[index])
    }
}
