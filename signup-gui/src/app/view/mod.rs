pub mod login;
pub mod registration;
pub mod toast;

use iced::{widget::stack, Length};

use signup_ui::{
    component::{button, card},
    theme::{self, Mode},
    widget::*,
};

use crate::app::{message::Message, toast::Toasts};

pub const CARD_MAX_WIDTH: f32 = 448.0;

/// Wraps a screen into a centered card, with the theme switch on top and the notifications
/// drawn over everything else.
pub fn layout<'a>(
    content: Element<'a, Message>,
    mode: Mode,
    toasts: &'a Toasts,
) -> Element<'a, Message> {
    let switch = button::secondary(
        None,
        match mode {
            Mode::Light => "Dark mode",
            Mode::Dark => "Light mode",
        },
    )
    .on_press(Message::ThemeToggle);

    let page = Column::new()
        .push(
            Container::new(switch)
                .align_right(Length::Fill)
                .padding(15)
                .style(theme::container::foreground),
        )
        .push(
            Container::new(card::simple(content).max_width(CARD_MAX_WIDTH))
                .center_x(Length::Fill)
                .padding(20),
        );

    let page = Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::container::background);

    if toasts.is_empty() {
        page.into()
    } else {
        stack![
            page,
            Container::new(toast::toasts_view(toasts))
                .align_right(Length::Fill)
                .align_bottom(Length::Fill)
                .padding(20),
        ]
        .into()
    }
}
