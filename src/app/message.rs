// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications::{self, Severity};
use crate::ui::theming::ThemeMode;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Raise a sample toast of the given severity.
    Notify(Severity),
    /// Add a note to the workspace.
    AddNote,
    /// The user asked to delete every note; gated behind a confirmation.
    ClearNotesRequested,
    /// The delete-all confirmation prompt was answered.
    ClearNotesDecided(bool),
    /// Switch and persist the theme mode.
    ThemeModeSelected(ThemeMode),
    /// Notification subsystem state changes (dismissals, expiries, answers).
    Notification(notifications::NotificationMessage),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional theme override (`light`, `dark`, `system`).
    pub theme: Option<ThemeMode>,
    /// Optional toast message to raise on startup.
    pub note: Option<String>,
    /// Severity for the startup toast; defaults to info.
    pub severity: Option<Severity>,
}
