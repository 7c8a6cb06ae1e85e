use iced::widget::container::Style;
use iced::{Background, Border, Shadow, Vector};

use super::palette::ContainerPalette;
use super::Theme;

fn card(palette: &ContainerPalette) -> Style {
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: if let Some(color) = palette.border {
            Border {
                radius: 12.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border::default()
        },
        shadow: Shadow {
            color: iced::Color {
                a: 0.15,
                ..iced::Color::BLACK
            },
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
    }
}

pub fn simple(theme: &Theme) -> Style {
    card(&theme.colors.cards.simple)
}
