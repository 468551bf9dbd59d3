// SPDX-License-Identifier: MPL-2.0
//! Styles for the preview overlay.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius, shadow,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed backdrop covering the page while a preview is open.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// The dialog holding the image and its info panel.
pub fn dialog(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}
