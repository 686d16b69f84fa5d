//! Colors and widget styles.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};
use mapdice_core::Visual;

/// Dark palette.
pub mod colors {
    use iced::Color;

    pub const BG_DARK: Color = Color::from_rgb(0.11, 0.11, 0.13);
    pub const BG_CARD: Color = Color::from_rgb(0.18, 0.18, 0.20);
    pub const BG_CARD_EXCLUDED: Color = Color::from_rgb(0.08, 0.08, 0.09);

    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.93, 0.93, 0.93);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.45, 0.45, 0.48);

    pub const ACCENT: Color = Color::from_rgb(0.98, 0.27, 0.33);

    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.28);
}

/// Window background.
pub fn background(_: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::BG_DARK)),
        ..Default::default()
    }
}

/// Borderless image button. Disabled looks the same as active so the
/// animation frames are not dimmed.
pub fn card_button(_: &Theme, status: button::Status) -> button::Style {
    let border = match status {
        button::Status::Hovered => Border {
            color: colors::ACCENT,
            width: 1.0,
            radius: 4.0.into(),
        },
        _ => Border::default(),
    };
    button::Style {
        background: None,
        text_color: colors::TEXT_PRIMARY,
        border,
        ..Default::default()
    }
}

/// Stand-in for a card whose image is missing.
pub fn placeholder(visual: Visual) -> container::Style {
    let (bg, text) = match visual {
        Visual::Normal => (colors::BG_CARD, colors::TEXT_PRIMARY),
        Visual::Excluded => (colors::BG_CARD_EXCLUDED, colors::TEXT_MUTED),
    };
    container::Style {
        background: Some(Background::Color(bg)),
        text_color: Some(text),
        border: Border {
            color: colors::BORDER,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

/// Text color matching [`placeholder`].
pub fn placeholder_text(visual: Visual) -> Color {
    match visual {
        Visual::Normal => colors::TEXT_PRIMARY,
        Visual::Excluded => colors::TEXT_MUTED,
    }
}
