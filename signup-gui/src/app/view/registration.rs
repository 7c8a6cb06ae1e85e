use iced::{
    widget::{row, Space},
    Alignment, Length,
};

use signup_ui::{
    component::{button, form, text},
    theme,
    widget::*,
};

use crate::app::{message::Message, route::Route, state::RegistrationState};

pub const NAME_INPUT_ID: &str = "registration_name";

pub const TITLE: &str = "Create Account";
pub const SUBTITLE: &str = "Join us today! Create your account to get started";
pub const SUBMIT_LABEL: &str = "Create Account";
pub const SUBMITTING_LABEL: &str = "Creating account...";

fn field<'a>(
    label: &'static str,
    placeholder: &'static str,
    value: &form::Value<String>,
    on_change: fn(String) -> Message,
    processing: bool,
) -> form::Form<'a, Message> {
    let form = if processing {
        form::Form::new_disabled(placeholder, value)
    } else {
        form::Form::new(placeholder, value, on_change).on_submit(Message::RegistrationSubmit)
    };
    form.label(label).size(text::P1_SIZE).padding(10)
}

pub fn registration_view(state: &RegistrationState) -> Element<'_, Message> {
    let processing = state.is_processing();

    let name = field(
        "Full Name",
        "John Doe",
        &state.name,
        Message::RegistrationUpdateName,
        processing,
    )
    .id(NAME_INPUT_ID);
    let email = field(
        "Email Address",
        "name@example.com",
        &state.email,
        Message::RegistrationUpdateEmail,
        processing,
    );
    let company_name = field(
        "Company Name",
        "Acme Inc.",
        &state.company_name,
        Message::RegistrationUpdateCompanyName,
        processing,
    );
    let password = field(
        "Password",
        "Enter your password",
        &state.password,
        Message::RegistrationUpdatePassword,
        processing,
    )
    .secure(!state.show_password);

    // Toggling visibility never submits the form.
    let toggle = button::transparent(None, if state.show_password { "Hide" } else { "Show" })
        .on_press(Message::RegistrationTogglePassword);
    let password = Row::new()
        .spacing(5)
        .align_y(Alignment::End)
        .push(Container::new(password).width(Length::Fill))
        .push(Container::new(toggle).padding([2, 0]));

    let submit = button::primary(
        None,
        if processing {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        },
    )
    .width(Length::Fill)
    .on_press_maybe((!processing).then_some(Message::RegistrationSubmit));

    let sign_in = row![
        Space::with_width(Length::Fill),
        text::p2_regular("Already have an account?").style(theme::text::secondary),
        button::link(None, "Sign in").on_press(Message::NavigateTo(Route::Login)),
        Space::with_width(Length::Fill),
    ]
    .spacing(5)
    .align_y(Alignment::Center);

    Column::new()
        .push(text::h2(TITLE))
        .push(text::p2_regular(SUBTITLE).style(theme::text::secondary))
        .push(Space::with_height(10))
        .push(name)
        .push(email)
        .push(company_name)
        .push(password)
        .push(Space::with_height(5))
        .push(submit)
        .push(sign_in)
        .spacing(15)
        .into()
}
