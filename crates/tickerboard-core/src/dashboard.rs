//! Refresh driver: owns the displayed batch and schedules retrieval cycles.
//!
//! A cycle marks the dashboard as loading (the previous batch stays
//! renderable), retrieves a fresh batch, swaps it in and notifies. Cycles are
//! run one at a time by [`spawn_refresh`]; a tick that comes due while a
//! cycle is still running is skipped.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::retriever::QuoteRetriever;
use crate::{QuoteBatch, Symbol};

pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load stock data. Showing demo data instead.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Default,
    Destructive,
}

/// Human-readable status message for a notification sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn loaded(count: usize) -> Self {
        Self {
            title: String::from("Stock data updated"),
            description: format!("Loaded {count} stocks successfully"),
            severity: Severity::Default,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            title: String::from("Error"),
            description: message.into(),
            severity: Severity::Destructive,
        }
    }
}

pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// State handed to the rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub batch: Arc<QuoteBatch>,
    pub loading: bool,
    pub error: Option<String>,
}

impl DashboardSnapshot {
    fn initial() -> Self {
        Self {
            batch: Arc::new(QuoteBatch::empty()),
            loading: true,
            error: None,
        }
    }
}

pub trait DashboardSurface: Send + Sync {
    fn render(&self, snapshot: &DashboardSnapshot);
}

/// Result of one retrieval cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Loaded { count: usize, synthetic: usize },
    Failed { message: String },
}

/// Produces a batch for a symbol set; implemented by [`QuoteRetriever`].
pub trait BatchLoader: Send + Sync {
    fn load<'a>(
        &'a self,
        symbols: &'a [Symbol],
    ) -> Pin<Box<dyn Future<Output = QuoteBatch> + Send + 'a>>;
}

impl BatchLoader for QuoteRetriever {
    fn load<'a>(
        &'a self,
        symbols: &'a [Symbol],
    ) -> Pin<Box<dyn Future<Output = QuoteBatch> + Send + 'a>> {
        Box::pin(self.retrieve(symbols))
    }
}

pub struct Dashboard {
    loader: Arc<dyn BatchLoader>,
    symbols: Vec<Symbol>,
    state: Mutex<DashboardSnapshot>,
    surface: Arc<dyn DashboardSurface>,
    notifier: Arc<dyn NotificationSink>,
}

impl Dashboard {
    pub fn new(
        loader: Arc<dyn BatchLoader>,
        symbols: Vec<Symbol>,
        surface: Arc<dyn DashboardSurface>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            loader,
            symbols,
            state: Mutex::new(DashboardSnapshot::initial()),
            surface,
            notifier,
        }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        self.lock_state().clone()
    }

    /// Run one retrieval cycle and publish its result.
    pub async fn refresh(&self) -> CycleOutcome {
        let loading = self.update(|state| {
            state.loading = true;
            state.error = None;
        });
        self.surface.render(&loading);

        // A panic inside the cycle surfaces here as a JoinError.
        let loader = Arc::clone(&self.loader);
        let symbols = self.symbols.clone();
        let cycle = tokio::spawn(async move { loader.load(&symbols).await }).await;

        let (outcome, notification) = match cycle {
            Ok(batch) => {
                let count = batch.len();
                let synthetic = batch.synthetic_count();
                let batch = Arc::new(batch);
                self.update(|state| {
                    state.batch = batch;
                    state.loading = false;
                    state.error = None;
                });
                (
                    CycleOutcome::Loaded { count, synthetic },
                    Notification::loaded(count),
                )
            }
            Err(error) => {
                tracing::error!(error = %error, "retrieval cycle failed");
                self.update(|state| {
                    state.batch = Arc::new(QuoteBatch::empty());
                    state.loading = false;
                    state.error = Some(String::from(LOAD_FAILURE_MESSAGE));
                });
                (
                    CycleOutcome::Failed {
                        message: String::from(LOAD_FAILURE_MESSAGE),
                    },
                    Notification::failed(LOAD_FAILURE_MESSAGE),
                )
            }
        };

        let published = self.snapshot();
        self.surface.render(&published);
        self.notifier.notify(notification);
        outcome
    }

    fn update<F>(&self, apply: F) -> DashboardSnapshot
    where
        F: FnOnce(&mut DashboardSnapshot),
    {
        let mut state = self.lock_state();
        apply(&mut state);
        state.clone()
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, DashboardSnapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Cadence of the scheduled refresh task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSchedule {
    pub interval: Duration,
    /// Stop on its own after this many cycles; `None` runs until shutdown.
    pub max_cycles: Option<u64>,
}

impl RefreshSchedule {
    pub const fn every(interval: Duration) -> Self {
        Self {
            interval,
            max_cycles: None,
        }
    }

    pub const fn with_max_cycles(mut self, max_cycles: u64) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }
}

/// Handle to a running refresh task. Dropping it aborts the task.
pub struct RefreshHandle {
    shutdown: watch::Sender<bool>,
    task: Option<JoinHandle<u64>>,
    cycles: u64,
}

impl RefreshHandle {
    /// Stop scheduling. A cycle already in flight is allowed to finish.
    ///
    /// Returns the number of cycles that ran.
    pub async fn shutdown(mut self) -> u64 {
        let _ = self.shutdown.send(true);
        self.join().await
    }

    /// Wait for the task to stop on its own (`max_cycles` reached).
    ///
    /// Safe to cancel; the task keeps running and can still be shut down.
    pub async fn finished(&mut self) -> u64 {
        self.join().await
    }

    async fn join(&mut self) -> u64 {
        let Some(task) = self.task.as_mut() else {
            return self.cycles;
        };
        let result = task.await;
        self.task = None;
        self.cycles = result.unwrap_or_else(|error| {
            tracing::warn!(error = %error, "refresh task ended abnormally");
            0
        });
        self.cycles
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Run one cycle now and then one per interval until shut down.
pub fn spawn_refresh(dashboard: Arc<Dashboard>, schedule: RefreshSchedule) -> RefreshHandle {
    let (shutdown, mut shutdown_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(schedule.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut cycles = 0_u64;

        loop {
            if schedule.max_cycles.is_some_and(|max| cycles >= max) {
                break;
            }

            tokio::select! {
                _ = shutdown_rx.changed() => break,
                _ = ticker.tick() => {
                    let outcome = dashboard.refresh().await;
                    cycles += 1;
                    tracing::debug!(cycle = cycles, ?outcome, "refresh cycle finished");
                }
            }
        }

        cycles
    });

    RefreshHandle {
        shutdown,
        task: Some(task),
        cycles: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_match_dashboard_copy() {
        let loaded = Notification::loaded(8);
        assert_eq!(loaded.title, "Stock data updated");
        assert_eq!(loaded.description, "Loaded 8 stocks successfully");
        assert_eq!(loaded.severity, Severity::Default);

        let failed = Notification::failed(LOAD_FAILURE_MESSAGE);
        assert_eq!(failed.title, "Error");
        assert_eq!(failed.severity, Severity::Destructive);
    }

    #[test]
    fn schedule_builder_sets_cycle_limit() {
        let schedule = RefreshSchedule::every(Duration::from_secs(30)).with_max_cycles(2);
        assert_eq!(schedule.max_cycles, Some(2));
        assert_eq!(schedule.interval, Duration::from_secs(30));
    }
}
