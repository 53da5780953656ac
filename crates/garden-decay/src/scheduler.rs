//! Cancellable fixed-period recompute task.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

use garden_core::errors::{GardenError, GardenResult};

/// Handle to a running recompute task.
///
/// Cancelling is idempotent, and dropping the handle cancels the task.
#[derive(Debug)]
pub struct RecomputeHandle {
    task: JoinHandle<()>,
    cancelled: Arc<AtomicBool>,
}

impl RecomputeHandle {
    /// Stop further recomputation. Safe to call any number of times.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::AcqRel) {
            debug!("recompute task cancelled");
        }
        self.task.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// True once the task has stopped running, whether cancelled or not.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for RecomputeHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Run `callback` every `period`, starting one period from now.
///
/// Must be called from within a tokio runtime. Late ticks are delayed rather
/// than bursted, so a stalled runtime never replays a backlog.
pub fn schedule_recompute<F>(period: Duration, mut callback: F) -> GardenResult<RecomputeHandle>
where
    F: FnMut() + Send + 'static,
{
    if period.is_zero() {
        return Err(GardenError::InvalidConfig {
            reason: "recompute period must be greater than zero".to_string(),
        });
    }
    let runtime = tokio::runtime::Handle::try_current().map_err(|e| {
        GardenError::SchedulerUnavailable {
            reason: e.to_string(),
        }
    })?;

    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancelled);
    let first_tick = Instant::now() + period;

    let task = runtime.spawn(async move {
        let mut ticker = tokio::time::interval_at(first_tick, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if flag.load(Ordering::Acquire) {
                break;
            }
            crate::recompute_span!(period.as_millis() as u64).in_scope(&mut callback);
        }
    });

    Ok(RecomputeHandle { task, cancelled })
}
