use iced::{widget::container, Alignment, Length};

use crate::{
    component::{button, text},
    theme::{self, Theme},
    widget::*,
};

pub const TOAST_WIDTH: f32 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
}

/// A single dismissible notification card.
pub fn toast<'a, T: 'a + Clone>(
    kind: Kind,
    title: &'a str,
    description: &'a str,
    on_close: T,
) -> Container<'a, T> {
    let style: fn(&Theme) -> container::Style = match kind {
        Kind::Success => theme::notification::success,
        Kind::Error => theme::notification::error,
    };
    Container::new(
        Row::new()
            .spacing(10)
            .align_y(Alignment::Start)
            .push(
                Column::new()
                    .spacing(4)
                    .width(Length::Fill)
                    .push(text::p1_bold(title))
                    .push(text::p2_regular(description)),
            )
            .push(button::transparent(None, "×").on_press(on_close)),
    )
    .padding(15)
    .width(Length::Fixed(TOAST_WIDTH))
    .style(style)
}
