use std::time::Instant;

use thiserror::Error;
use tracing::info;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon_cancelable,
};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::normalize_field::normalize_field::normalize_field;
use crate::core::actions::normalize_field::normalize_settings::{
    NormalizeSettings, NormalizeSettingsError,
};
use crate::core::actions::progress::ProgressSink;
use crate::core::data::lyapunov_field::{LyapunovField, LyapunovFieldError};
use crate::core::fractals::lyapunov::algorithm::LyapunovAlgorithm;
use crate::core::fractals::lyapunov::errors::LyapunovParamsError;
use crate::core::fractals::lyapunov::params::LyapunovParams;
use crate::core::util::pixel_to_parameter_coords::PixelToParameterCoordsError;

#[derive(Debug, Error)]
pub enum ComputeFractalError {
    #[error("invalid parameters: {0}")]
    Params(#[from] LyapunovParamsError),
    #[error("invalid normalize settings: {0}")]
    Settings(#[from] NormalizeSettingsError),
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("sampling error: {0}")]
    Sampling(#[from] PixelToParameterCoordsError),
    #[error("field error: {0}")]
    Field(#[from] LyapunovFieldError),
}

impl From<GenerateFractalError<PixelToParameterCoordsError>> for ComputeFractalError {
    fn from(err: GenerateFractalError<PixelToParameterCoordsError>) -> Self {
        match err {
            GenerateFractalError::Cancelled(cancelled) => Self::Cancelled(cancelled),
            GenerateFractalError::Algorithm(err) => Self::Sampling(err),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FractalOutput {
    /// Exponents in bits per iteration, sentinel where undefined.
    pub raw: LyapunovField,
    /// Display values in `[0, 1]`.
    pub normalized: LyapunovField,
}

/// Samples the raw exponent field for `params`.
///
/// Only the structural checks sampling needs are applied here, so
/// single-sample axes and zero-extent viewports are accepted; use
/// [`compute_fractal`] for a fully validated request.
pub fn sample_lyapunov_field<C, P>(
    params: &LyapunovParams,
    cancel: &C,
    progress: &mut P,
) -> Result<LyapunovField, ComputeFractalError>
where
    C: CancelToken,
    P: ProgressSink + ?Sized,
{
    let algorithm = LyapunovAlgorithm::new(params)?;
    let grid_size = algorithm.grid_size();
    let values = generate_fractal_parallel_rayon_cancelable(grid_size, &algorithm, cancel, progress)?;

    Ok(LyapunovField::from_data(grid_size, values)?)
}

/// Validates `params`, samples the raw field, then normalizes it for display.
pub fn compute_fractal<C, P>(
    params: &LyapunovParams,
    settings: &NormalizeSettings,
    cancel: &C,
    progress: &mut P,
) -> Result<FractalOutput, ComputeFractalError>
where
    C: CancelToken,
    P: ProgressSink + ?Sized,
{
    params.validate()?;
    settings.validate()?;

    info!(
        width = params.width,
        height = params.height,
        sequence = %params.sequence,
        iterations = params.iterations,
        warmup = params.warmup,
        "computing lyapunov field"
    );

    let start = Instant::now();
    let raw = sample_lyapunov_field(params, cancel, progress)?;
    let sampled = start.elapsed();
    let normalized = normalize_field(&raw, settings);

    info!(
        sampling = ?sampled,
        total = ?start.elapsed(),
        "lyapunov field computed"
    );

    Ok(FractalOutput { raw, normalized })
}
