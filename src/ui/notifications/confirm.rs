// SPDX-License-Identifier: MPL-2.0
//! Modal confirmation prompt.
//!
//! Rendered for the whole time a confirmation request is pending. The
//! prompt offers exactly two affordances: "Cancel" resolving the request
//! with `false` and "Confirm" resolving it with `true`. The dimmed
//! backdrop swallows input to the view underneath but never resolves the
//! request itself, so the caller can only be resumed by an explicit
//! choice.

use super::manager::Message;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, center, container, opaque, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Confirmation prompt widget configuration.
pub struct ConfirmPrompt;

impl ConfirmPrompt {
    /// Renders the modal prompt for the pending confirmation.
    pub fn view(prompt: &str) -> Element<'_, Message> {
        let prompt_text = Text::new(prompt)
            .size(typography::BODY_LG)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.palette().text),
            });

        let cancel = button(Text::new("Cancel").size(typography::BODY))
            .on_press(Message::ConfirmAnswered(false))
            .padding([spacing::XS, spacing::MD])
            .style(cancel_button_style);

        let confirm = button(Text::new("Confirm").size(typography::BODY))
            .on_press(Message::ConfirmAnswered(true))
            .padding([spacing::XS, spacing::MD])
            .style(confirm_button_style);

        let actions = Row::new()
            .spacing(spacing::SM)
            .push(cancel)
            .push(confirm);

        let card = Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Right)
            .push(Container::new(prompt_text).width(Length::Fill))
            .push(actions);

        let card = Container::new(card)
            .width(Length::Fixed(sizing::DIALOG_WIDTH))
            .padding(spacing::LG)
            .style(card_style);

        opaque(center(card).style(backdrop_style))
    }
}

/// Style function for the dimmed backdrop behind the card.
fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Style function for the prompt card.
fn card_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            color: theme.extended_palette().background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the confirm (primary) button.
fn confirm_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_600,
        button::Status::Pressed => palette::PRIMARY_700,
        button::Status::Active | button::Status::Disabled => palette::PRIMARY_500,
    };

    button::Style {
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

/// Style function for the cancel (neutral) button.
fn cancel_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let overlay = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: overlay.map(|a| {
            iced::Background::Color(Color {
                a,
                ..palette::GRAY_400
            })
        }),
        text_color: base.text,
        border: iced::Border {
            color: theme.extended_palette().background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
