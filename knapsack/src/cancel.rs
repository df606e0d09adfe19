use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// How often a long-running loop checks [`CancelToken::is_cancelled`].
///
/// Checking on every iteration would dominate the runtime of the cheapest
/// algorithms (greedy, ratio-greedy); checking too rarely delays reaction to
/// a timeout. 4096 is the same granularity `plaans-aries`' own solver loops
/// use for their "should I stop" checks.
pub const POLL_INTERVAL: u64 = 4096;

/// A cooperative cancellation flag shared between the dispatcher thread and
/// the worker thread running a solver.
///
/// The dispatcher never joins an abandoned worker: on timeout it flips the
/// flag and moves on. A well-behaved solver polls the flag every
/// [`POLL_INTERVAL`] iterations of its dominant loop and returns the best
/// allocation it has found so far once it observes cancellation, so the
/// worker thread still terminates on its own, just after the dispatcher has
/// already stopped waiting for it.
#[derive(Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
