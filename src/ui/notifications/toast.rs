// SPDX-License-Identifier: MPL-2.0
//! Toast widget and per-notification expiry timer.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with severity-colored accents and a dismiss button. Each
//! toast owns a single-shot expiry timer created alongside it; the timer
//! is an independently abortable task, so dismissing a toast early
//! cancels its timer instead of letting it fire against a removed entry.

use super::manager::Message;
use super::notification::{Notification, NotificationId, Severity};
use crate::config::ToastPosition;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, task, Color, Element, Length, Task, Theme};
use std::future::Future;
use std::time::Duration;

/// Single-shot future backing a toast's auto-dismiss timer.
///
/// Sleeps the notification's delay on the cooperative runtime, then
/// yields [`Message::Expired`] exactly once. The sleep never fires early;
/// the runtime may deliver it arbitrarily later than the nominal delay.
pub fn expiry(notification: &Notification) -> impl Future<Output = Message> + Send + 'static {
    expire_after(notification.auto_dismiss_delay(), notification.id())
}

async fn expire_after(delay: Duration, id: NotificationId) -> Message {
    tokio::time::sleep(delay).await;
    Message::Expired(id)
}

/// Wraps [`expiry`] in an abortable iced task.
///
/// The returned handle aborts the timer when dropped, which ties timer
/// cancellation to the lifetime of the manager's entry for this toast.
pub fn expiry_task(notification: &Notification) -> (Task<Message>, task::Handle) {
    let (task, handle) = Task::future(expiry(notification)).abortable();
    (task, handle.abort_on_drop())
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();

        let glyph = Text::new(Self::severity_glyph(severity))
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let message = Text::new(notification.message())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let notification_id = notification.id();
        let dismiss_button = button(Text::new("\u{00d7}").size(typography::BODY_LG))
            .on_press(Message::Dismiss(notification_id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [glyph] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay with all active notifications.
    ///
    /// Toasts are stacked in creation order (oldest first) at the corner
    /// given by `position`. With no active notifications the overlay is an
    /// empty, zero-sized container.
    pub fn view_overlay<'a>(
        notifications: impl Iterator<Item = &'a Notification>,
        position: ToastPosition,
    ) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = notifications.map(Self::view).collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let (align_x, align_y) = anchor(position);
        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(align_x);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(align_x)
            .align_y(align_y)
            .padding(spacing::MD)
            .into()
    }

    /// Returns the accent glyph for the severity level.
    fn severity_glyph(severity: Severity) -> &'static str {
        match severity {
            Severity::Success => "\u{2713}",
            Severity::Info => "\u{2139}",
            Severity::Warning => "\u{26a0}",
            Severity::Error => "\u{2715}",
        }
    }
}

/// Maps a configured corner to container alignment.
fn anchor(position: ToastPosition) -> (alignment::Horizontal, alignment::Vertical) {
    match position {
        ToastPosition::BottomRight => (alignment::Horizontal::Right, alignment::Vertical::Bottom),
        ToastPosition::BottomLeft => (alignment::Horizontal::Left, alignment::Vertical::Bottom),
        ToastPosition::TopRight => (alignment::Horizontal::Right, alignment::Vertical::Top),
        ToastPosition::TopLeft => (alignment::Horizontal::Left, alignment::Vertical::Top),
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
