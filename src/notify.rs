//! Notification port.
//!
//! Success and error notifications flow through an injected [`Notifier`]
//! handed to whichever task needs one, rather than a process-wide sink.
//! Each call enqueues a toast message on the application channel; delivery
//! is fire-and-forget, matching the throwaway nature of toasts.

use tokio::sync::mpsc;

use crate::state::AppMessage;

// ============================================================================
// Notifier
// ============================================================================

/// Cheap cloneable handle for emitting toast notifications.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<AppMessage>,
}

impl Notifier {
    /// Creates a notifier over the application message channel.
    #[must_use]
    pub fn new(tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self { tx }
    }

    /// Emits a success toast.
    pub fn success(&self, message: impl Into<String>) {
        self.send(format!("[+] {}", message.into()));
    }

    /// Emits an error toast.
    pub fn error(&self, message: impl Into<String>) {
        self.send(format!("[x] {}", message.into()));
    }

    /// Emits a neutral informational toast.
    pub fn info(&self, message: impl Into<String>) {
        self.send(message.into());
    }

    fn send(&self, message: String) {
        // Receiver may be dropped during shutdown - safe to ignore.
        let _ = self.tx.send(AppMessage::Toast(message));
    }
}

// ============================================================================
// Tests
// ============================================================================
