use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::progress::{NoProgress, ProgressSink, ProgressTracker};
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;

/// Error type for cancelable fractal generation.
///
/// Distinguishes between algorithm failures and cancellation, allowing callers
/// to handle each case appropriately (e.g., not displaying cancellation as errors).
#[derive(Debug, Error)]
pub enum GenerateFractalError<E: std::error::Error + 'static> {
    /// The operation was cancelled before completion.
    #[error(transparent)]
    Cancelled(Cancelled),
    /// The fractal algorithm reported a failure.
    #[error("algorithm error: {0}")]
    Algorithm(#[source] E),
}

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// For progress reporting and cancellation, use
/// [`generate_fractal_parallel_rayon_cancelable`].
pub fn generate_fractal_parallel_rayon<Alg>(
    grid_size: GridSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send + 'static,
{
    generate_fractal_parallel_rayon_cancelable(grid_size, algorithm, &NeverCancel, &mut NoProgress)
        .map_err(|e| match e {
            GenerateFractalError::Algorithm(alg_err) => alg_err,
            GenerateFractalError::Cancelled(_) => {
                unreachable!("NeverCancel token should never signal cancellation")
            }
        })
}

/// Generates fractal data in parallel, one rayon task per row.
///
/// Each row polls `cancel` before it starts and reports to `progress` once it
/// is done; rows may finish in any order, but reports come from a count of
/// completed rows and stay non-decreasing. A finished run ends with exactly
/// one report of `1.0`. A cancelled run returns
/// [`GenerateFractalError::Cancelled`] and never reports `1.0`.
///
/// Results are row-major, matching
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C, P>(
    grid_size: GridSize,
    algorithm: &Alg,
    cancel: &C,
    progress: &mut P,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send + 'static,
    C: CancelToken,
    P: ProgressSink + ?Sized,
{
    let width = grid_size.width();
    let height = grid_size.height();
    let tracker = ProgressTracker::new(progress, height);

    let rows: Result<Vec<Vec<Alg::Success>>, GenerateFractalError<Alg::Failure>> = (0..height)
        .into_par_iter()
        .map(|y| {
            if cancel.is_cancelled() {
                return Err(GenerateFractalError::Cancelled(Cancelled));
            }

            let row = (0..width)
                .map(|x| algorithm.compute(Point { x, y }))
                .collect::<Result<Vec<_>, _>>()
                .map_err(GenerateFractalError::Algorithm)?;

            tracker.row_completed();
            Ok(row)
        })
        .collect();

    let values = rows?.into_iter().flatten().collect();
    tracker.finish();

    Ok(values)
}
