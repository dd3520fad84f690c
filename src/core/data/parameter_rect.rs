use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ParameterRectError {
    #[error("parameter bounds must be finite: x [{min_x}, {max_x}], y [{min_y}, {max_y}]")]
    NonFiniteBound {
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    },
    #[error("parameter rect size must not be negative: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// Viewport over the two map parameters, `r_x` on the horizontal axis and
/// `r_y` on the vertical one. A zero-extent axis pins every sample on that
/// axis to a single parameter value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ParameterRect {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl ParameterRect {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self, ParameterRectError> {
        if ![min_x, max_x, min_y, max_y].iter().all(|bound| bound.is_finite()) {
            return Err(ParameterRectError::NonFiniteBound {
                min_x,
                max_x,
                min_y,
                max_y,
            });
        }

        let width = max_x - min_x;
        let height = max_y - min_y;

        if width < 0.0 || height < 0.0 {
            return Err(ParameterRectError::InvalidSize { width, height });
        }

        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }
}
