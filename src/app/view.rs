// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! The base screen is a small notes workspace; the notification overlay
//! and, while a confirmation is pending, the modal prompt are layered on
//! top of it.

use super::Message;
use crate::config::ToastPosition;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, spacing, typography};
use crate::ui::notifications::{self, ConfirmPrompt, Severity, Toast};
use crate::ui::theming::ThemeMode;
use iced::widget::{button, pick_list, space, stack, Column, Container, Row, Text};
use iced::{Color, Element, Length, Theme};

const THEME_MODES: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub notes: &'a [String],
    pub theme_mode: ThemeMode,
    pub toast_position: ToastPosition,
    pub notifications: &'a notifications::Manager,
}

/// Renders the workspace with the notification layers stacked on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base = Container::new(workspace(ctx.notes, ctx.theme_mode))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers: Vec<Element<'_, Message>> = vec![base.into()];

    layers.push(
        Toast::view_overlay(ctx.notifications.active(), ctx.toast_position)
            .map(Message::Notification),
    );

    if let Some(prompt) = ctx.notifications.pending_prompt() {
        layers.push(ConfirmPrompt::view(prompt).map(Message::Notification));
    }

    stack(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn workspace(notes: &[String], theme_mode: ThemeMode) -> Element<'_, Message> {
    let header = Row::new()
        .align_y(iced::alignment::Vertical::Center)
        .push(Text::new("IcedHerald Demo").size(typography::TITLE_MD))
        .push(space::horizontal())
        .push(
            pick_list(THEME_MODES, Some(theme_mode), Message::ThemeModeSelected)
                .text_size(typography::BODY)
                .padding([spacing::XXS, spacing::SM]),
        );

    let severity_buttons = Row::with_children(
        [
            Severity::Success,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
        ]
        .into_iter()
        .map(severity_button)
        .collect::<Vec<_>>(),
    )
    .spacing(spacing::XS);

    let workspace_buttons = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new("Add note").size(typography::BODY))
                .on_press(Message::AddNote)
                .padding([spacing::XXS, spacing::SM])
                .style(primary_button_style),
        )
        .push(
            button(Text::new("Delete all notes").size(typography::BODY))
                .on_press(Message::ClearNotesRequested)
                .padding([spacing::XXS, spacing::SM])
                .style(danger_button_style),
        );

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .push(header)
        .push(severity_buttons)
        .push(workspace_buttons)
        .push(notes_list(notes))
        .into()
}

fn notes_list(notes: &[String]) -> Element<'_, Message> {
    if notes.is_empty() {
        return Text::new("No notes yet")
            .size(typography::CAPTION)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().background.strong.color),
            })
            .into();
    }

    Column::with_children(
        notes
            .iter()
            .map(|note| Text::new(note.as_str()).size(typography::BODY).into())
            .collect::<Vec<Element<'_, Message>>>(),
    )
    .spacing(spacing::XXS)
    .into()
}

/// Severity-accented outline button raising a sample toast.
fn severity_button(severity: Severity) -> Element<'static, Message> {
    let accent = severity.color();

    button(Text::new(severity.to_string()).size(typography::BODY))
        .on_press(Message::Notify(severity))
        .padding([spacing::XXS, spacing::SM])
        .style(move |theme: &Theme, status| outline_button_style(theme, status, accent))
        .into()
}

fn outline_button_style(
    theme: &Theme,
    status: iced::widget::button::Status,
    accent: Color,
) -> iced::widget::button::Style {
    use iced::widget::button::Status;

    let overlay = match status {
        Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        Status::Active | Status::Disabled => None,
    };

    iced::widget::button::Style {
        background: overlay.map(|a| iced::Background::Color(Color { a, ..accent })),
        text_color: theme.palette().text,
        border: iced::Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

fn primary_button_style(
    _theme: &Theme,
    status: iced::widget::button::Status,
) -> iced::widget::button::Style {
    use iced::widget::button::Status;

    let background = match status {
        Status::Hovered => palette::PRIMARY_600,
        Status::Pressed => palette::PRIMARY_700,
        Status::Active | Status::Disabled => palette::PRIMARY_500,
    };

    iced::widget::button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

fn danger_button_style(
    _theme: &Theme,
    status: iced::widget::button::Status,
) -> iced::widget::button::Style {
    use iced::widget::button::Status;

    let background = match status {
        Status::Hovered | Status::Pressed => palette::ERROR_500,
        Status::Active | Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::ERROR_500
        },
    };

    iced::widget::button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
