//! Dismissable notifications.
//!
//! The editor pushes a toast for every user-facing outcome (uploads, exports,
//! rejected input). Displaying them is the host's job; this module owns the
//! queue and expiry.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastVariant {
    pub fn default_duration(&self) -> Duration {
        match self {
            ToastVariant::Success | ToastVariant::Info => Duration::from_secs(3),
            ToastVariant::Warning => Duration::from_secs(4),
            ToastVariant::Error => Duration::from_secs(5),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Toast {
    /// Assigned by [`ToastManager::push`]
    pub id: u64,
    pub title: Option<String>,
    pub message: String,
    pub variant: ToastVariant,
    pub created: Instant,
    pub duration: Duration,
}

impl Toast {
    fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            id: 0,
            title: None,
            message: message.into(),
            variant,
            created: Instant::now(),
            duration: variant.default_duration(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Error)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created.elapsed() >= self.duration
    }

    /// Fraction of the display time left, in `[0, 1]`.
    pub fn remaining_percent(&self) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = self.created.elapsed().as_secs_f32();
        (1.0 - elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[derive(Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mut toast: Toast) -> u64 {
        toast.id = self.next_id;
        self.next_id += 1;
        let id = toast.id;
        self.toasts.push(toast);
        id
    }

    /// Dismiss a toast. Returns false if it was already gone.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn prune_expired(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn count(&self) -> usize {
        self.toasts.len()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn last(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}
