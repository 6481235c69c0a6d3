// SPDX-License-Identifier: MPL-2.0
//! `iced_herald` provides toast notifications and blocking confirmation
//! prompts for applications built with the Iced GUI toolkit.
//!
//! The heart of the crate is [`ui::notifications::Manager`]: update logic
//! raises auto-expiring toasts with `notify` and gates destructive
//! actions on a user decision with `confirm`, which hands back a one-shot
//! future resolved by the rendered prompt. The bundled demo application
//! (`src/main.rs`) shows the full wiring.

#![doc(html_root_url = "https://docs.rs/iced_herald/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
