use std::sync::Arc;
use std::time::Duration;

use tickerboard_core::{spawn_refresh, Dashboard, DashboardConfig, RefreshSchedule};

use crate::cli::WatchArgs;
use crate::error::CliError;

use super::CommandReport;

pub async fn run(args: &WatchArgs, dashboard: &Arc<Dashboard>) -> Result<CommandReport, CliError> {
    let config = DashboardConfig::new(
        dashboard.symbols().to_vec(),
        Duration::from_secs(args.interval_secs),
    )?;

    let mut schedule = RefreshSchedule::every(config.refresh_interval);
    if let Some(max_cycles) = args.cycles {
        schedule = schedule.with_max_cycles(max_cycles);
    }
    tracing::info!(
        symbols = config.symbols.len(),
        interval_secs = args.interval_secs,
        "watching quotes"
    );

    let mut handle = spawn_refresh(Arc::clone(dashboard), schedule);
    let completed = tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            signal?;
            None
        }
        cycles = handle.finished() => Some(cycles),
    };

    let cycles = match completed {
        Some(cycles) => cycles,
        None => {
            tracing::info!("interrupted, stopping refresh");
            handle.shutdown().await
        }
    };

    Ok(CommandReport {
        snapshot: dashboard.snapshot(),
        cycles,
    })
}
