//! Scheduling for simulated feature runs.
//!
//! DESIGN
//! ======
//! [`simulate`] turns a feature input into its literal result after the
//! feature's fixed delay, reporting percent progress every [`PROGRESS_TICK`].
//! It is generic over the sleep function so the browser can drive it with
//! `gloo-timers` and tests with tokio's paused clock.
//!
//! [`abortable`] wraps a run in a [`PendingTask`] handle. The panel owns the
//! handle; dropping it (teardown or a newer run) aborts the run before it can
//! write into state that no longer exists.

use std::future::Future;
use std::time::Duration;

use features::{FeatureId, FeatureInput};
use futures::future::{AbortHandle, Abortable};

#[cfg(test)]
#[path = "mock_task_test.rs"]
mod mock_task_test;

/// Interval between progress reports.
pub const PROGRESS_TICK: Duration = Duration::from_millis(100);

/// Percent of `done` out of `total` ticks, rounded down.
#[must_use]
pub fn percent(done: u32, total: u32) -> u8 {
    if total == 0 {
        return 100;
    }
    let pct = u64::from(done.min(total)) * 100 / u64::from(total);
    u8::try_from(pct).unwrap_or(100)
}

/// Wait out `I::delay()` in ticks, then return the literal result for `input`.
pub async fn simulate<I, S, F, P>(input: I, sleep: S, mut on_progress: P) -> I::Output
where
    I: FeatureInput,
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
    P: FnMut(u8),
{
    let total = I::delay();
    let ticks = u32::try_from(total.as_millis() / PROGRESS_TICK.as_millis()).unwrap_or(u32::MAX).max(1);
    let step = total / ticks;
    for tick in 1..=ticks {
        sleep(step).await;
        on_progress(percent(tick, ticks));
    }
    input.respond()
}

/// Owner handle for a pending simulated run. Dropping it aborts the run.
#[derive(Debug)]
pub struct PendingTask {
    feature: FeatureId,
    handle: AbortHandle,
}

impl PendingTask {
    #[must_use]
    pub fn feature(&self) -> FeatureId {
        self.feature
    }
}

impl Drop for PendingTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Pair `fut` with the handle that owns it.
pub fn abortable<Fut: Future>(feature: FeatureId, fut: Fut) -> (Abortable<Fut>, PendingTask) {
    let (handle, registration) = AbortHandle::new_pair();
    (Abortable::new(fut, registration), PendingTask { feature, handle })
}
