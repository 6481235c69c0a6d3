// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the demo workspace.
//!
//! The `App` struct wires the notification subsystem into a small notes
//! workspace: buttons raise toasts of each severity and the destructive
//! "delete all notes" action is gated behind a confirmation prompt. This
//! file keeps the update loop close to the policy decisions (startup
//! toasts, preference persistence) so user-facing behavior is easy to
//! audit.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::ui::notifications::{self, Notification, Severity};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 760;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 540;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Root Iced application state bridging the workspace and the
/// notification subsystem.
pub struct App {
    notes: Vec<String>,
    theme_mode: ThemeMode,
    toast_position: config::ToastPosition,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("notes", &self.notes.len())
            .field("notifications", &self.notifications)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            theme_mode: ThemeMode::System,
            toast_position: config::ToastPosition::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a Fn boot closure; the RefCell<Option<_>> lets the
    // one-time Flags move through it exactly once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

/// Sample message per severity for the demo buttons.
fn sample_message(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "Notes saved",
        Severity::Info => "Sync scheduled",
        Severity::Warning => "Storage space is almost full",
        Severity::Error => "Could not sync notes",
    }
}

impl App {
    /// Initializes application state from persisted preferences and
    /// CLI flags, raising startup toasts where called for.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();

        let mut app = App {
            theme_mode: flags.theme.unwrap_or(config.general.theme_mode),
            toast_position: config.toasts.position,
            ..Self::default()
        };

        let mut tasks = Vec::new();

        if let Some(warning) = config_warning {
            tasks.push(
                app.notifications
                    .push(Notification::warning(warning))
                    .map(Message::Notification),
            );
        }

        if let Some(note) = flags.note {
            let severity = flags.severity.unwrap_or(Severity::Info);
            tasks.push(
                app.notifications
                    .notify(severity, note)
                    .map(Message::Notification),
            );
        }

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        match self.notes.len() {
            0 => "IcedHerald Demo".to_string(),
            1 => "IcedHerald Demo (1 note)".to_string(),
            n => format!("IcedHerald Demo ({n} notes)"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notify(severity) => self
                .notifications
                .notify(severity, sample_message(severity))
                .map(Message::Notification),
            Message::AddNote => {
                self.notes.push(format!("Note {}", self.notes.len() + 1));
                self.notifications
                    .notify(Severity::Success, "Note added")
                    .map(Message::Notification)
            }
            Message::ClearNotesRequested => {
                match self
                    .notifications
                    .confirm("Delete all notes? This cannot be undone.")
                {
                    Ok(decision) => Task::perform(decision, Message::ClearNotesDecided),
                    // A prompt is already on screen; leave it in place.
                    Err(_) => Task::none(),
                }
            }
            Message::ClearNotesDecided(true) => {
                self.notes.clear();
                self.notifications
                    .notify(Severity::Success, "All notes deleted")
                    .map(Message::Notification)
            }
            Message::ClearNotesDecided(false) => Task::none(),
            Message::ThemeModeSelected(mode) => {
                self.theme_mode = mode;
                if config::save(&self.current_config()).is_err() {
                    return self
                        .notifications
                        .notify(Severity::Warning, "Settings could not be saved")
                        .map(Message::Notification);
                }
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            notes: &self.notes,
            theme_mode: self.theme_mode,
            toast_position: self.toast_position,
            notifications: &self.notifications,
        })
    }

    /// Snapshot of the preferences worth persisting.
    fn current_config(&self) -> config::Config {
        config::Config {
            general: config::GeneralConfig {
                theme_mode: self.theme_mode,
            },
            toasts: config::ToastConfig {
                position: self.toast_position,
            },
        }
    }
}
