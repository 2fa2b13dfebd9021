//! Terminal implementations of the dashboard's rendering and notification seams.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use tickerboard_core::{
    DashboardSnapshot, DashboardSurface, Notification, NotificationSink, Severity, ViewModel,
};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Prints each completed refresh to stdout.
pub struct TerminalSurface {
    view_model: ViewModel,
    format: OutputFormat,
    pretty: bool,
    has_rendered: AtomicBool,
    failure: Mutex<Option<CliError>>,
}

impl TerminalSurface {
    pub fn new(view_model: ViewModel, format: OutputFormat, pretty: bool) -> Self {
        Self {
            view_model,
            format,
            pretty,
            has_rendered: AtomicBool::new(false),
            failure: Mutex::new(None),
        }
    }

    /// The first rendering failure, if any. Later frames are still attempted.
    pub fn take_failure(&self) -> Option<CliError> {
        self.failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    fn record_failure(&self, error: CliError) {
        tracing::error!(error = %error, "failed to render dashboard");
        let mut failure = self.failure.lock().unwrap_or_else(PoisonError::into_inner);
        failure.get_or_insert(error);
    }

    fn write_frame(&self, snapshot: &DashboardSnapshot) -> Result<(), CliError> {
        let frame = super::render(snapshot, &self.view_model, self.format, self.pretty)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{frame}")?;
        stdout.flush()?;
        Ok(())
    }
}

impl DashboardSurface for TerminalSurface {
    fn render(&self, snapshot: &DashboardSnapshot) {
        if snapshot.loading {
            // Later cycles keep showing the previous frame.
            if self.format == OutputFormat::Table && !self.has_rendered.load(Ordering::Relaxed) {
                eprintln!("Loading stock data...");
            }
            return;
        }

        self.has_rendered.store(true, Ordering::Relaxed);
        if let Err(error) = self.write_frame(snapshot) {
            self.record_failure(error);
        }
    }
}

/// Writes notifications to stderr as `[title] description`.
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl NotificationSink for StderrNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Default => {
                tracing::info!(title = %notification.title, "{}", notification.description)
            }
            Severity::Destructive => {
                tracing::warn!(title = %notification.title, "{}", notification.description)
            }
        }
        eprintln!("[{}] {}", notification.title, notification.description);
    }
}
