use std::sync::Arc;

use tickerboard_core::Dashboard;

use super::CommandReport;

pub async fn run(dashboard: &Arc<Dashboard>) -> CommandReport {
    let outcome = dashboard.refresh().await;
    tracing::debug!(?outcome, "single refresh finished");

    CommandReport {
        snapshot: dashboard.snapshot(),
        cycles: 1,
    }
}
