// src/shared/alert.rs
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

/// How long a banner stays visible before it clears itself.
pub const ALERT_TTL: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

/// Transient banner with last-write-wins semantics.
///
/// Each `show` aborts the clear timer of the previous banner, so a message
/// always survives its full TTL instead of being wiped early by a stale
/// timer from an earlier call.
#[derive(Clone)]
pub struct AlertPresenter {
    current: Arc<Mutex<Option<Alert>>>,
    clear_task: Arc<Mutex<Option<JoinHandle<()>>>>,
    ttl: Duration,
}

impl Default for AlertPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertPresenter {
    pub fn new() -> Self {
        Self::with_ttl(ALERT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
            clear_task: Arc::new(Mutex::new(None)),
            ttl,
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn show(&self, kind: AlertKind, message: impl Into<String>) {
        {
            let mut current = self.current.lock().unwrap();
            *current = Some(Alert {
                kind,
                message: message.into(),
            });
        }

        let mut task = self.clear_task.lock().unwrap();
        if let Some(pending) = task.take() {
            pending.abort();
        }

        let slot = Arc::clone(&self.current);
        let ttl = self.ttl;
        *task = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut current = slot.lock().unwrap();
            *current = None;
        }));
    }

    pub fn current(&self) -> Option<Alert> {
        self.current.lock().unwrap().clone()
    }

    /// Immediate dismissal, used when the admin dialog closes.
    pub fn clear(&self) {
        let mut task = self.clear_task.lock().unwrap();
        if let Some(pending) = task.take() {
            pending.abort();
        }
        let mut current = self.current.lock().unwrap();
        *current = None;
    }
}
