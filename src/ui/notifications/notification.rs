// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::error::Error;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Auto-dismiss delays per severity.
///
/// Success and error are fixed contract values; warning and info share a
/// single value sitting between the two.
const SUCCESS_DELAY: Duration = Duration::from_millis(3000);
const ERROR_DELAY: Duration = Duration::from_millis(5000);
const NOTICE_DELAY: Duration = Duration::from_millis(4000);

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, 3s duration).
    #[default]
    Success,
    /// Informational message (blue, 4s duration).
    Info,
    /// Warning that doesn't block operation (orange, 4s duration).
    Warning,
    /// Error requiring attention (red, 5s duration).
    Error,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the auto-dismiss delay for this severity.
    #[must_use]
    pub fn auto_dismiss_delay(&self) -> Duration {
        match self {
            Severity::Success => SUCCESS_DELAY,
            Severity::Warning | Severity::Info => NOTICE_DELAY,
            Severity::Error => ERROR_DELAY,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{label}")
    }
}

impl FromStr for Severity {
    type Err = Error;

    /// Parses a severity label, rejecting anything outside the four known
    /// levels so string boundaries (CLI flags) cannot smuggle in a level
    /// with undefined timing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Severity::Success),
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            other => Err(Error::Severity(other.to_string())),
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Severity level (determines color and auto-dismiss delay).
    severity: Severity,
    /// Display text, stored verbatim. Formatting is the caller's concern.
    message: String,
    /// Custom auto-dismiss delay (overrides severity default).
    custom_dismiss_delay: Option<Duration>,
}

impl Notification {
    /// Creates a new notification with the given severity and message.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            custom_dismiss_delay: None,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Sets a custom auto-dismiss delay, overriding the severity default.
    ///
    /// Useful for notifications that need more time to read (e.g., long file lists).
    #[must_use]
    pub fn auto_dismiss(mut self, delay: Duration) -> Self {
        self.custom_dismiss_delay = Some(delay);
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the display text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the delay after which this notification expires.
    ///
    /// A custom delay takes precedence over the severity default.
    #[must_use]
    pub fn auto_dismiss_delay(&self) -> Duration {
        self.custom_dismiss_delay
            .unwrap_or_else(|| self.severity.auto_dismiss_delay())
    }
}
