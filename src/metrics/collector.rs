use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use super::types::{RunSnapshot, StatusClassCounts};

/// Aggregate counters for one run.
///
/// This is the only mutable state shared across workers. All mutation goes
/// through the report operations below; the lock is held only for the
/// duration of an increment or a snapshot read, never across I/O.
#[derive(Debug, Default)]
pub struct MetricsCollector {
    state: Mutex<MetricsState>,
}

#[derive(Debug, Default)]
struct MetricsState {
    total: u64,
    success: u64,
    failed: u64,
    bytes_sent: u64,
    classes: StatusClassCounts,
    active_workers: u64,
    started_at: Option<Instant>,
}

impl MetricsCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the run start instant. Call once, before any reporting.
    pub fn start(&self) {
        self.lock_state().started_at = Some(Instant::now());
    }

    /// Records an attempt that produced an HTTP response.
    ///
    /// 2xx and 3xx count as success; every other status is bucketed by class
    /// and counted as failed.
    pub fn record_completed(&self, status: u16, bytes_sent: u64) {
        let mut state = self.lock_state();
        state.total = state.total.saturating_add(1);
        state.bytes_sent = state.bytes_sent.saturating_add(bytes_sent);
        if (200..400).contains(&status) {
            state.success = state.success.saturating_add(1);
        } else {
            state.failed = state.failed.saturating_add(1);
        }
        let slot = match status {
            200..=299 => &mut state.classes.success_2xx,
            300..=399 => &mut state.classes.redirect_3xx,
            400..=499 => &mut state.classes.client_error_4xx,
            500..=599 => &mut state.classes.server_error_5xx,
            _ => &mut state.classes.other,
        };
        *slot = slot.saturating_add(1);
    }

    /// Records an attempt that failed before producing a response.
    pub fn record_failed(&self) {
        let mut state = self.lock_state();
        state.total = state.total.saturating_add(1);
        state.failed = state.failed.saturating_add(1);
        state.classes.transport_error = state.classes.transport_error.saturating_add(1);
    }

    pub fn worker_started(&self) {
        let mut state = self.lock_state();
        state.active_workers = state.active_workers.saturating_add(1);
    }

    /// Saturating at zero: a stray extra stop report can never drive the
    /// count negative.
    pub fn worker_stopped(&self) {
        let mut state = self.lock_state();
        state.active_workers = state.active_workers.saturating_sub(1);
    }

    #[must_use]
    pub fn snapshot(&self) -> RunSnapshot {
        let state = self.lock_state();
        let elapsed = state
            .started_at
            .map(|started| started.elapsed())
            .unwrap_or_default();
        RunSnapshot {
            elapsed,
            total: state.total,
            success: state.success,
            failed: state.failed,
            bytes_sent: state.bytes_sent,
            classes: state.classes,
            active_workers: state.active_workers,
            rps_x100: rate_x100(state.total, elapsed),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, MetricsState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Requests per second scaled by 100; zero when nothing has elapsed.
fn rate_x100(total: u64, elapsed: Duration) -> u64 {
    let elapsed_ms = elapsed.as_millis();
    if elapsed_ms == 0 {
        return 0;
    }
    let scaled = u128::from(total)
        .saturating_mul(100_000)
        .checked_div(elapsed_ms)
        .unwrap_or(0);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

/// Reports a worker active for exactly its own lifetime.
///
/// The stop report runs on drop, so it fires exactly once even when the
/// owning worker unwinds early on cancellation.
pub struct ActiveWorkerGuard {
    collector: Arc<MetricsCollector>,
}

impl ActiveWorkerGuard {
    #[must_use]
    pub fn acquire(collector: &Arc<MetricsCollector>) -> Self {
        collector.worker_started();
        Self {
            collector: Arc::clone(collector),
        }
    }
}

impl Drop for ActiveWorkerGuard {
    fn drop(&mut self) {
        self.collector.worker_stopped();
    }
}
