use iced::Color;

pub const WHITE: Color = iced::Color::WHITE;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;

/// Near-black used as the dark background.
pub const LIGHT_BLACK: Color = Color::from_rgb(
    0x0A as f32 / 255.0,
    0x0A as f32 / 255.0,
    0x0B as f32 / 255.0,
);
pub const GREY_7: Color = Color::from_rgb(
    0x18 as f32 / 255.0,
    0x18 as f32 / 255.0,
    0x1B as f32 / 255.0,
);
pub const GREY_6: Color = Color::from_rgb(
    0x27 as f32 / 255.0,
    0x27 as f32 / 255.0,
    0x2A as f32 / 255.0,
);
pub const GREY_5: Color = Color::from_rgb(
    0x3F as f32 / 255.0,
    0x3F as f32 / 255.0,
    0x46 as f32 / 255.0,
);
pub const GREY_4: Color = Color::from_rgb(
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
    0x7A as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0xA1 as f32 / 255.0,
    0xA1 as f32 / 255.0,
    0xAA as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xE4 as f32 / 255.0,
    0xE4 as f32 / 255.0,
    0xE7 as f32 / 255.0,
);
pub const GREY_1: Color = Color::from_rgb(
    0xF4 as f32 / 255.0,
    0xF4 as f32 / 255.0,
    0xF5 as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xDC as f32 / 255.0,
    0x26 as f32 / 255.0,
    0x26 as f32 / 255.0,
);
pub const LIGHT_RED: Color = Color::from_rgb(
    0xFE as f32 / 255.0,
    0xE2 as f32 / 255.0,
    0xE2 as f32 / 255.0,
);
pub const DARK_RED: Color = Color::from_rgb(
    0x7F as f32 / 255.0,
    0x1D as f32 / 255.0,
    0x1D as f32 / 255.0,
);
pub const GREEN: Color = Color::from_rgb(
    0x16 as f32 / 255.0,
    0xA3 as f32 / 255.0,
    0x4A as f32 / 255.0,
);
