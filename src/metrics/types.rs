use std::time::Duration;

/// Point-in-time copy of the aggregate counters plus derived fields.
///
/// All fields are read under one lock acquisition, so
/// `success + failed == total` holds in every snapshot regardless of
/// concurrent reporting.
#[derive(Debug, Clone, Default)]
pub struct RunSnapshot {
    pub elapsed: Duration,
    pub total: u64,
    pub success: u64,
    pub failed: u64,
    pub bytes_sent: u64,
    pub classes: StatusClassCounts,
    pub active_workers: u64,
    /// Requests per second scaled by 100; zero when nothing has elapsed.
    pub rps_x100: u64,
}

/// Per-class outcome counters.
///
/// 2xx/3xx are the success classes; 4xx/5xx are failure-bucketed response
/// classes; `transport_error` counts attempts that never produced a
/// response. `other` absorbs out-of-range codes (1xx) and is not displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusClassCounts {
    pub success_2xx: u64,
    pub redirect_3xx: u64,
    pub client_error_4xx: u64,
    pub server_error_5xx: u64,
    pub transport_error: u64,
    pub other: u64,
}
