// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the ordered collection of active notifications and
//! the single pending confirmation slot. Presentation code never mutates
//! either directly; it reports timer expiry, dismiss clicks, and
//! confirmation answers back through [`Message`] values.

use super::notification::{Notification, NotificationId, Severity};
use super::toast;
use crate::error::{Error, Result};
use iced::futures::channel::oneshot;
use iced::task;
use iced::Task;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID (user clicked the close button).
    Dismiss(NotificationId),
    /// A notification's auto-dismiss timer elapsed.
    Expired(NotificationId),
    /// The user answered the pending confirmation prompt.
    ConfirmAnswered(bool),
}

/// An active notification paired with the abort handle of its expiry task.
///
/// Dropping the entry aborts the timer, so a manual dismiss can never be
/// followed by a late expiry firing for the same notification.
struct ActiveToast {
    notification: Notification,
    _timer: task::Handle,
}

/// The single outstanding confirmation request.
struct PendingConfirm {
    prompt: String,
    responder: oneshot::Sender<bool>,
}

/// Future handed to [`Manager::confirm`] callers.
///
/// Resolves exactly once with the user's choice: `true` for confirm,
/// `false` for cancel. If the manager is torn down while the prompt is
/// still open, the decision resolves to `false` (the non-destructive
/// answer) rather than leaving the caller suspended.
#[derive(Debug)]
pub struct Decision {
    receiver: oneshot::Receiver<bool>,
}

impl Future for Decision {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|choice| choice.unwrap_or(false))
    }
}

/// Manages active notifications and the pending confirmation request.
#[derive(Default)]
pub struct Manager {
    /// Active notifications in creation order (oldest first).
    active: Vec<ActiveToast>,
    /// The exclusive pending confirmation slot.
    pending_confirm: Option<PendingConfirm>,
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("active", &self.active_count())
            .field("confirm_pending", &self.pending_confirm.is_some())
            .finish()
    }
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification to the active collection.
    ///
    /// Repeated calls simply add independent entries; there is no
    /// deduplication. The returned task drives the notification's expiry
    /// timer and must be handed to the iced runtime; its abort handle is
    /// stored alongside the entry.
    #[must_use = "the returned task drives the toast's expiry timer"]
    pub fn push(&mut self, notification: Notification) -> Task<Message> {
        let (expiry, handle) = toast::expiry_task(&notification);
        self.active.push(ActiveToast {
            notification,
            _timer: handle,
        });
        expiry
    }

    /// Convenience over [`push`](Self::push) for the common case.
    #[must_use = "the returned task drives the toast's expiry timer"]
    pub fn notify(&mut self, severity: Severity, message: impl Into<String>) -> Task<Message> {
        self.push(Notification::new(severity, message))
    }

    /// Dismisses a notification by its ID, cancelling its expiry timer.
    ///
    /// Returns `true` if the notification was found and removed. Unknown
    /// or already-removed IDs are a no-op; the expiry timer and a manual
    /// dismiss may race for the same entry and whichever arrives second
    /// must not fail.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.active.iter().position(|t| t.notification.id() == id) {
            self.active.remove(pos);
            true
        } else {
            false
        }
    }

    /// Requests a yes/no decision from the user.
    ///
    /// Renders a confirmation prompt and returns a [`Decision`] that
    /// resolves once the user picks an affordance. There is no timeout:
    /// confirmations gate destructive actions and must not default
    /// silently. A second request while one is pending is rejected with
    /// [`Error::ConfirmPending`]; the first caller's prompt stays intact.
    pub fn confirm(&mut self, prompt: impl Into<String>) -> Result<Decision> {
        if self.pending_confirm.is_some() {
            return Err(Error::ConfirmPending);
        }

        let (responder, receiver) = oneshot::channel();
        self.pending_confirm = Some(PendingConfirm {
            prompt: prompt.into(),
            responder,
        });

        Ok(Decision { receiver })
    }

    /// Resolves the pending confirmation with the user's choice.
    ///
    /// Clears the prompt and completes the caller's [`Decision`]. Taking
    /// the slot makes a double resolution structurally impossible; calling
    /// this with no pending request is a no-op.
    pub fn resolve_confirm(&mut self, choice: bool) {
        if let Some(pending) = self.pending_confirm.take() {
            // The caller may have dropped its Decision; nothing to deliver then.
            let _ = pending.responder.send(choice);
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) | Message::Expired(id) => {
                self.dismiss(*id);
            }
            Message::ConfirmAnswered(choice) => {
                self.resolve_confirm(*choice);
            }
        }
    }

    /// Returns the active notifications in creation order.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter().map(|t| &t.notification)
    }

    /// Returns the number of active notifications.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Returns whether any notifications are active.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.active.is_empty()
    }

    /// Returns the prompt text of the pending confirmation, if any.
    #[must_use]
    pub fn pending_prompt(&self) -> Option<&str> {
        self.pending_confirm.as_ref().map(|p| p.prompt.as_str())
    }

    /// Tears down all notification state.
    ///
    /// Every expiry timer is aborted, and a still-pending confirmation
    /// resolves its caller's [`Decision`] to `false` via the dropped
    /// responder.
    pub fn clear(&mut self) {
        self.active.clear();
        self.pending_confirm = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.active_count(), 0);
        assert!(!manager.has_notifications());
        assert!(manager.pending_prompt().is_none());
    }

    #[test]
    fn notify_appends_in_call_order() {
        let mut manager = Manager::new();
        let _ = manager.notify(Severity::Success, "first");
        let _ = manager.notify(Severity::Error, "second");
        let _ = manager.notify(Severity::Info, "third");

        let snapshot: Vec<(Severity, String)> = manager
            .active()
            .map(|n| (n.severity(), n.message().to_string()))
            .collect();
        assert_eq!(
            snapshot,
            vec![
                (Severity::Success, "first".to_string()),
                (Severity::Error, "second".to_string()),
                (Severity::Info, "third".to_string()),
            ]
        );
    }

    #[test]
    fn repeated_messages_are_independent_entries() {
        let mut manager = Manager::new();
        let _ = manager.notify(Severity::Info, "same");
        let _ = manager.notify(Severity::Info, "same");

        assert_eq!(manager.active_count(), 2);
        let ids: Vec<_> = manager.active().map(Notification::id).collect();
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn dismiss_removes_exactly_one_entry() {
        let mut manager = Manager::new();
        let _ = manager.notify(Severity::Success, "a");
        let _ = manager.notify(Severity::Success, "b");
        let _ = manager.notify(Severity::Success, "c");
        let ids: Vec<_> = manager.active().map(Notification::id).collect();

        assert!(manager.dismiss(ids[1]));

        let remaining: Vec<_> = manager.active().map(|n| n.message().to_string()).collect();
        assert_eq!(remaining, vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut manager = Manager::new();
        let _ = manager.notify(Severity::Success, "once");
        let id = manager.active().next().unwrap().id();

        assert!(manager.dismiss(id));
        assert!(!manager.dismiss(id));
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn dismiss_unknown_id_is_a_no_op() {
        let mut manager = Manager::new();
        let _ = manager.notify(Severity::Warning, "kept");
        let stray = NotificationId::new();

        assert!(!manager.dismiss(stray));
        assert_eq!(manager.active_count(), 1);
    }

    #[test]
    fn handle_message_routes_dismiss_and_expiry() {
        let mut manager = Manager::new();
        let _ = manager.notify(Severity::Success, "a");
        let _ = manager.notify(Severity::Error, "b");
        let ids: Vec<_> = manager.active().map(Notification::id).collect();

        manager.handle_message(&Message::Dismiss(ids[0]));
        assert_eq!(manager.active_count(), 1);

        manager.handle_message(&Message::Expired(ids[1]));
        assert_eq!(manager.active_count(), 0);

        // Late expiry after a manual dismiss must not raise.
        manager.handle_message(&Message::Expired(ids[0]));
    }

    #[test]
    fn confirm_exposes_prompt_until_answered() {
        let mut manager = Manager::new();
        let mut decision = manager.confirm("Are you sure?").unwrap();

        assert_eq!(manager.pending_prompt(), Some("Are you sure?"));
        assert!((&mut decision).now_or_never().is_none());

        manager.resolve_confirm(true);
        assert!(manager.pending_prompt().is_none());
        assert_eq!(decision.now_or_never(), Some(true));
    }

    #[test]
    fn cancel_resolves_false() {
        let mut manager = Manager::new();
        let decision = manager.confirm("Delete everything?").unwrap();

        manager.handle_message(&Message::ConfirmAnswered(false));

        assert!(manager.pending_prompt().is_none());
        assert_eq!(decision.now_or_never(), Some(false));
    }

    #[test]
    fn second_confirm_is_rejected_while_pending() {
        let mut manager = Manager::new();
        let first = manager.confirm("first?").unwrap();

        assert!(matches!(
            manager.confirm("second?"),
            Err(Error::ConfirmPending)
        ));
        // The first request is untouched by the rejected one.
        assert_eq!(manager.pending_prompt(), Some("first?"));

        manager.resolve_confirm(true);
        assert_eq!(first.now_or_never(), Some(true));
    }

    #[test]
    fn confirm_slot_reopens_after_resolution() {
        let mut manager = Manager::new();
        let _ = manager.confirm("first?").unwrap();
        manager.resolve_confirm(false);

        assert!(manager.confirm("second?").is_ok());
        assert_eq!(manager.pending_prompt(), Some("second?"));
    }

    #[test]
    fn resolve_without_pending_is_a_no_op() {
        let mut manager = Manager::new();
        manager.resolve_confirm(true);
        assert!(manager.pending_prompt().is_none());
    }

    #[test]
    fn clear_drops_toasts_and_cancels_confirmation() {
        let mut manager = Manager::new();
        let _ = manager.notify(Severity::Success, "gone");
        let decision = manager.confirm("still there?").unwrap();

        manager.clear();

        assert_eq!(manager.active_count(), 0);
        assert!(manager.pending_prompt().is_none());
        // Teardown answers for the user with the non-destructive choice.
        assert_eq!(decision.now_or_never(), Some(false));
    }

    #[test]
    fn notifications_and_confirmation_do_not_interact() {
        let mut manager = Manager::new();
        let _ = manager.confirm("proceed?").unwrap();
        let _ = manager.notify(Severity::Info, "background work finished");

        assert_eq!(manager.pending_prompt(), Some("proceed?"));
        assert_eq!(manager.active_count(), 1);

        manager.resolve_confirm(true);
        assert_eq!(manager.active_count(), 1);
    }
}
