use iced::{
    widget::{row, Space},
    Alignment, Length,
};

use signup_ui::{
    component::{button, form, text},
    theme,
    widget::*,
};

use crate::app::{message::Message, route::Route, state::LoginState};

pub fn login_view(state: &LoginState) -> Element<'_, Message> {
    let create_account = row![
        Space::with_width(Length::Fill),
        text::p2_regular("Don't have an account?").style(theme::text::secondary),
        button::link(None, "Create an account").on_press(Message::NavigateTo(Route::Register)),
        Space::with_width(Length::Fill),
    ]
    .spacing(5)
    .align_y(Alignment::Center);

    Column::new()
        .push(text::h2("Sign in"))
        .push_maybe(
            state
                .registered_email
                .is_some()
                .then(|| text::p2_regular("Your account is ready.").style(theme::text::success)),
        )
        .push_maybe(state.registered_email.as_ref().map(|email| {
            let value = form::Value {
                value: email.clone(),
                ..Default::default()
            };
            form::Form::new_disabled("name@example.com", &value)
                .label("Email Address")
                .size(text::P1_SIZE)
                .padding(10)
        }))
        .push(
            text::p2_regular("Use your email address and password to sign in.")
                .style(theme::text::secondary),
        )
        .push(create_account)
        .spacing(15)
        .into()
}
