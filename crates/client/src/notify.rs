//! User-facing notifications as an injected seam.
//!
//! Controllers describe outcomes as notifications with a severity; the
//! host shell decides how to surface them (toasts, status bar, logs).
//! Severity is visual only - the moderation store emits an error-styled
//! notification for a successful delete, for example.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(s)
    }
}

/// One user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    /// Emit a notification.
    fn notify(&self, severity: Severity, message: &str);

    fn info(&self, message: &str) {
        self.notify(Severity::Info, message);
    }

    fn success(&self, message: &str) {
        self.notify(Severity::Success, message);
    }

    fn warning(&self, message: &str) {
        self.notify(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }
}

/// Notifier that routes everything through `tracing`.
///
/// The default for hosts that have no toast surface wired up yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info | Severity::Success => {
                tracing::info!(severity = %severity, "{message}");
            }
            Severity::Warning => tracing::warn!(severity = %severity, "{message}"),
            Severity::Error => tracing::error!(severity = %severity, "{message}"),
        }
    }
}

/// Notifier that records everything for later assertion.
///
/// Intended for tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    fn guard(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All notifications emitted so far.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.guard().clone()
    }

    /// Drain the recorded notifications.
    #[must_use]
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.guard())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.guard().push(Notification {
            severity,
            message: message.to_string(),
        });
    }
}
