use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

/// A sampling run stopped before every row was computed. Rows already done
/// are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("lyapunov sampling cancelled")]
pub struct Cancelled;

/// Cooperative cancellation, polled by the sampler before each grid row.
///
/// A host typically keeps an `Arc<AtomicBool>`, hands `&*flag` to the
/// sampler and stores `true` from elsewhere to stop the run.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl CancelToken for AtomicBool {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}
