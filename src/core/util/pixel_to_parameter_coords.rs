use crate::core::data::grid_size::GridSize;
use crate::core::data::parameter_rect::ParameterRect;
use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum PixelToParameterCoordsError {
    #[error(
        "point (x: {}, y: {}) is outside the {}x{} grid",
        .point.x, .point.y, .grid_size.width(), .grid_size.height()
    )]
    PointOutsideGrid { point: Point, grid_size: GridSize },
}

/// Distance in parameter space between neighbouring samples on one axis.
/// A single-sample axis has no neighbours, so its step is zero.
#[must_use]
pub fn axis_step(min: f64, max: f64, samples: u32) -> f64 {
    if samples < 2 {
        0.0
    } else {
        (max - min) / (samples - 1) as f64
    }
}

/// Precomputed per-axis steps for a grid laid over a parameter viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ParameterSteps {
    pub min_x: f64,
    pub min_y: f64,
    pub dx: f64,
    pub dy: f64,
}

impl ParameterSteps {
    #[must_use]
    pub fn new(grid_size: GridSize, parameter_rect: ParameterRect) -> Self {
        Self {
            min_x: parameter_rect.min_x(),
            min_y: parameter_rect.min_y(),
            dx: axis_step(parameter_rect.min_x(), parameter_rect.max_x(), grid_size.width()),
            dy: axis_step(parameter_rect.min_y(), parameter_rect.max_y(), grid_size.height()),
        }
    }

    #[inline]
    #[must_use]
    pub fn r_x(&self, x: u32) -> f64 {
        self.min_x + self.dx * x as f64
    }

    #[inline]
    #[must_use]
    pub fn r_y(&self, y: u32) -> f64 {
        self.min_y + self.dy * y as f64
    }
}

/// Maps a grid sample to its `(r_x, r_y)` parameter pair.
pub fn pixel_to_parameter_coords(
    point: Point,
    grid_size: GridSize,
    steps: &ParameterSteps,
) -> Result<(f64, f64), PixelToParameterCoordsError> {
    if !grid_size.contains_point(point) {
        return Err(PixelToParameterCoordsError::PointOutsideGrid { point, grid_size });
    }

    Ok((steps.r_x(point.x), steps.r_y(point.y)))
}
