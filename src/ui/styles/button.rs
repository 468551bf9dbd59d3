// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Preview buttons on project cards.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => button::Style::default(),
    }
}

/// Previous/next arrows and close button drawn over the preview.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::SM,
            snap: true,
        }
    }
}

/// Active filter button.
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        _ => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Inactive filter button. Adapts to light/dark theme.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };
    let border_color = match status {
        button::Status::Hovered => palette::PRIMARY_500,
        _ => palette::GRAY_400,
    };

    button::Style {
        background: Some(Background::Color(bg_color)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Flat text button used for navbar links and image triggers.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.strong.color,
        _ => palette.background.base.text,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let theme = Theme::Dark;
        let style_fn = overlay(WHITE, 0.5, 0.8);

        let normal = style_fn(&theme, button::Status::Active);
        let hover = style_fn(&theme, button::Status::Hovered);

        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn selected_and_unselected_differ() {
        let theme = Theme::Light;
        let on = selected(&theme, button::Status::Active);
        let off = unselected(&theme, button::Status::Active);
        assert_ne!(on.background, off.background);
    }

    #[test]
    fn link_has_no_background() {
        let style = link(&Theme::Dark, button::Status::Hovered);
        assert!(style.background.is_none());
    }
}
