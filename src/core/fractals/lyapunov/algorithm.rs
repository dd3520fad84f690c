use std::f64::consts::LN_2;
use std::ops::ControlFlow;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::forcing_sequence::{Forcing, ForcingLookup};
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::fractals::lyapunov::errors::LyapunovParamsError;
use crate::core::fractals::lyapunov::params::LyapunovParams;
use crate::core::util::pixel_to_parameter_coords::{
    ParameterSteps, PixelToParameterCoordsError, pixel_to_parameter_coords,
};

/// Raw value for a sample with no measurement: non-positive parameters, an
/// orbit that escaped `(0, 1)` during warmup, or no non-zero derivative.
pub const SENTINEL: f64 = -5.0;

/// Starting state of every orbit, independent of the parameters.
pub const INITIAL_STATE: f64 = 0.5;

#[inline]
fn is_bounded(v: f64) -> bool {
    v.is_finite() && v > 0.0 && v < 1.0
}

#[inline]
fn logistic_step(r: f64, v: f64) -> f64 {
    r * v * (1.0 - v)
}

/// Generalized Lyapunov exponent, in bits per iteration, of the logistic map
/// forced by `lookup` over the parameter pair `(r_x, r_y)`.
///
/// The first `warmup` entries of `lookup` drive the discarded transient; the
/// rest drive accumulation.
#[must_use]
pub fn lyapunov_exponent(r_x: f64, r_y: f64, lookup: &[Forcing], warmup: usize) -> f64 {
    if r_x <= 0.0 || r_y <= 0.0 {
        return SENTINEL;
    }

    let (transient, measured) = lookup.split_at(warmup.min(lookup.len()));

    let settled = transient.iter().try_fold(INITIAL_STATE, |v, forcing| {
        let next = logistic_step(forcing.select(r_x, r_y), v);
        if is_bounded(next) {
            ControlFlow::Continue(next)
        } else {
            ControlFlow::Break(next)
        }
    });

    let mut v = match settled {
        ControlFlow::Continue(v) => v,
        ControlFlow::Break(_) => return SENTINEL,
    };

    let mut sum_log = 0.0;
    let mut valid_terms: u64 = 0;

    for forcing in measured {
        let r = forcing.select(r_x, r_y);
        let derivative = (r * (1.0 - 2.0 * v)).abs();

        // a zero derivative would contribute ln(0)
        if derivative > 0.0 {
            sum_log += derivative.ln();
            valid_terms += 1;
        }

        v = logistic_step(r, v);
        if !is_bounded(v) {
            break;
        }
    }

    if valid_terms > 0 {
        sum_log / (valid_terms as f64 * LN_2)
    } else {
        SENTINEL
    }
}

/// Per-sample exponent computation over a grid laid on a parameter viewport.
///
/// Construction only performs the structural checks sampling needs; see
/// [`LyapunovParams::validate`] for the stricter request-level checks.
#[derive(Debug, Clone, PartialEq)]
pub struct LyapunovAlgorithm {
    grid_size: GridSize,
    steps: ParameterSteps,
    lookup: ForcingLookup,
    warmup: usize,
}

impl FractalAlgorithm for LyapunovAlgorithm {
    type Success = f64;
    type Failure = PixelToParameterCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let (r_x, r_y) = pixel_to_parameter_coords(pixel, self.grid_size, &self.steps)?;

        Ok(self.exponent(r_x, r_y))
    }

    fn grid_size(&self) -> GridSize {
        self.grid_size
    }
}

impl LyapunovAlgorithm {
    pub fn new(params: &LyapunovParams) -> Result<Self, LyapunovParamsError> {
        let grid_size = params.grid_size()?;
        let parameter_rect = params.parameter_rect()?;
        let lookup = params.forcing_sequence()?.lookup(params.total_steps());

        Ok(Self {
            grid_size,
            steps: ParameterSteps::new(grid_size, parameter_rect),
            lookup,
            warmup: params.warmup as usize,
        })
    }

    #[must_use]
    pub fn exponent(&self, r_x: f64, r_y: f64) -> f64 {
        lyapunov_exponent(r_x, r_y, self.lookup.as_slice(), self.warmup)
    }

    #[must_use]
    pub fn steps(&self) -> ParameterSteps {
        self.steps
    }
}
