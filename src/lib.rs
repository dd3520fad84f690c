mod controllers;
mod core;

pub use crate::controllers::cli::cli_controller::{CliController, FieldSummary};
pub use crate::controllers::params_record::{
    ParamsRecordError, RenderRecord, parse_render_record, read_render_record, record_from_value,
};
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::compute_fractal::compute_fractal::{
    ComputeFractalError, FractalOutput, compute_fractal, sample_lyapunov_field,
};
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon, generate_fractal_parallel_rayon_cancelable,
};
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::normalize_field::normalize_field::{
    FieldStats, normalize_field, normalize_values, normalize_values_serial,
};
pub use crate::core::actions::normalize_field::normalize_settings::{
    NormalizeSettings, NormalizeSettingsError,
};
pub use crate::core::actions::progress::{
    NoProgress, PROGRESS_REPORT_INTERVAL_ROWS, ProgressSink, ProgressTracker,
};
pub use crate::core::data::forcing_sequence::{
    Forcing, ForcingLookup, ForcingSequence, ForcingSequenceError,
};
pub use crate::core::data::grid_size::{GridSize, GridSizeError};
pub use crate::core::data::lyapunov_field::{LyapunovField, LyapunovFieldError};
pub use crate::core::data::parameter_rect::{ParameterRect, ParameterRectError};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::lyapunov::algorithm::{
    INITIAL_STATE, LyapunovAlgorithm, SENTINEL, lyapunov_exponent,
};
pub use crate::core::fractals::lyapunov::errors::LyapunovParamsError;
pub use crate::core::fractals::lyapunov::params::LyapunovParams;
pub use crate::core::util::pixel_to_parameter_coords::{
    ParameterSteps, PixelToParameterCoordsError, axis_step, pixel_to_parameter_coords,
};
