//! Transient notifications shown over the page.
//!
//! Toasts are fire-and-forget: they are pushed through the page reducer and
//! drop out once their lifetime has elapsed or the user dismisses them.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

pub const DEFAULT_TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "✔",
            Self::Warning => "⚠",
            Self::Error => "✖",
        }
    }
}

/// A notification as requested by a command, before it gets an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self::at(level, message, Utc::now())
    }

    /// Same as [`Toast::new`] with an explicit timestamp.
    pub fn at(level: ToastLevel, message: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, message)
    }
}

/// A queued toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveToast {
    pub id: ToastId,
    pub toast: Toast,
}

impl ActiveToast {
    pub fn is_expired(&self, now: DateTime<Utc>, lifetime: TimeDelta) -> bool {
        now - self.toast.created_at >= lifetime
    }
}

#[derive(Debug, Clone)]
pub struct ToastQueue {
    entries: Vec<ActiveToast>,
    next_id: u64,
    lifetime: TimeDelta,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_lifetime(DEFAULT_TOAST_LIFETIME)
    }
}

impl ToastQueue {
    pub fn with_lifetime(lifetime: Duration) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            lifetime: TimeDelta::from_std(lifetime).unwrap_or(TimeDelta::MAX),
        }
    }

    pub fn lifetime(&self) -> TimeDelta {
        self.lifetime
    }

    pub fn push(&mut self, toast: Toast) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.entries.push(ActiveToast { id, toast });
        id
    }

    /// Returns whether a toast with `id` was still queued.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Drops everything whose lifetime elapsed at `now`.
    pub fn expire(&mut self, now: DateTime<Utc>) -> usize {
        let lifetime = self.lifetime;
        let before = self.entries.len();
        self.entries.retain(|entry| !entry.is_expired(now, lifetime));
        before - self.entries.len()
    }

    /// Toasts still alive at `now`, oldest first.
    pub fn active(&self, now: DateTime<Utc>) -> impl Iterator<Item = &ActiveToast> {
        let lifetime = self.lifetime;
        self.entries
            .iter()
            .filter(move |entry| !entry.is_expired(now, lifetime))
    }

    /// Earliest moment a queued toast will expire, for scheduling a repaint.
    pub fn next_expiry(&self) -> Option<DateTime<Utc>> {
        self.entries
            .iter()
            .filter_map(|entry| entry.toast.created_at.checked_add_signed(self.lifetime))
            .min()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveToast> {
        self.entries.iter()
    }
}
