use thiserror::Error;

use crate::core::data::forcing_sequence::ForcingSequenceError;
use crate::core::data::grid_size::GridSizeError;
use crate::core::data::parameter_rect::ParameterRectError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LyapunovParamsError {
    #[error(transparent)]
    GridSize(#[from] GridSizeError),
    #[error(transparent)]
    ParameterRect(#[from] ParameterRectError),
    #[error(transparent)]
    Sequence(#[from] ForcingSequenceError),
    #[error("grid must be at least 2x2 samples: {width}x{height}")]
    TooFewSamples { width: u32, height: u32 },
    #[error("parameter viewport must have positive extent on both axes: {width}x{height}")]
    DegenerateViewport { width: f64, height: f64 },
}
