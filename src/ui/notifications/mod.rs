// SPDX-License-Identifier: MPL-2.0
//! Toast notification and confirmation system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns, plus a blocking yes/no confirmation flow
//! for gating destructive actions.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` owning the active collection and the pending
//!   confirmation slot
//! - [`toast`] - Toast widget and per-notification expiry timer
//! - [`confirm`] - Modal confirmation prompt widget
//!
//! # Usage
//!
//! ```ignore
//! use iced_herald::ui::notifications::{Manager, Severity};
//!
//! // In application state
//! let mut manager = Manager::new();
//!
//! // In update: raise a toast; the returned task drives its expiry timer
//! let task = manager.notify(Severity::Success, "Image saved").map(Message::Notification);
//!
//! // In update: gate a destructive action on a user decision
//! match manager.confirm("Delete all notes?") {
//!     Ok(decision) => Task::perform(decision, Message::DeleteDecided),
//!     Err(_) => Task::none(), // a prompt is already on screen
//! }
//!
//! // In view: render toasts and, while pending, the prompt
//! let overlay = Toast::view_overlay(manager.active(), position).map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - Toast delay: 3s for success, 4s for warning/info, 5s for errors
//! - Active toasts stack in creation order; no cap, no queueing
//! - Each toast's timer is single-shot and aborted on manual dismissal
//! - At most one confirmation may be pending per manager; a second
//!   request is rejected rather than queued or overwritten

mod confirm;
mod manager;
mod notification;
mod toast;

pub use confirm::ConfirmPrompt;
pub use manager::{Decision, Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::{expiry, expiry_task, Toast};
