use std::sync::{Mutex, PoisonError};

/// Rows completed between intermediate progress reports.
pub const PROGRESS_REPORT_INTERVAL_ROWS: u32 = 10;

/// Receives completion fractions in `[0, 1]`.
///
/// Values arrive non-decreasing, and a finished run always ends with exactly
/// one report of `1.0`.
pub trait ProgressSink: Send {
    fn report(&mut self, progress: f64);
}

impl<F> ProgressSink for F
where
    F: FnMut(f64) + Send,
{
    #[inline]
    fn report(&mut self, progress: f64) {
        self(progress)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    #[inline]
    fn report(&mut self, _: f64) {}
}

struct TrackerState<'a, P: ProgressSink + ?Sized> {
    sink: &'a mut P,
    completed_rows: u32,
}

/// Derives progress from the count of completed rows rather than from the
/// index of whichever row finished, so reports stay monotonic when rows
/// finish out of order on different threads.
pub struct ProgressTracker<'a, P: ProgressSink + ?Sized> {
    total_rows: u32,
    state: Mutex<TrackerState<'a, P>>,
}

impl<'a, P: ProgressSink + ?Sized> ProgressTracker<'a, P> {
    pub fn new(sink: &'a mut P, total_rows: u32) -> Self {
        Self {
            total_rows,
            state: Mutex::new(TrackerState {
                sink,
                completed_rows: 0,
            }),
        }
    }

    pub fn row_completed(&self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.completed_rows += 1;

        let completed = state.completed_rows;
        // 1.0 is reserved for finish
        if completed < self.total_rows && completed % PROGRESS_REPORT_INTERVAL_ROWS == 0 {
            state
                .sink
                .report(f64::from(completed) / f64::from(self.total_rows));
        }
    }

    pub fn finish(self) {
        let mut state = self.state.into_inner().unwrap_or_else(PoisonError::into_inner);
        state.sink.report(1.0);
    }
}
