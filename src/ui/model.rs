use crate::metrics::RunSnapshot;

/// Everything one dashboard frame needs: the run identity plus a consistent
/// metrics snapshot taken on the render tick.
#[derive(Debug, Clone)]
pub struct UiState {
    pub target: String,
    pub planned_total: Option<u64>,
    pub no_color: bool,
    pub snapshot: RunSnapshot,
}
