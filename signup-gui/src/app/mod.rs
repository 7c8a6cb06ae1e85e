pub mod config;
pub mod message;
pub mod route;
pub mod state;
pub mod toast;
pub mod view;

use std::time::Duration;

use iced::{Subscription, Task};
use tracing::{debug, info, warn};

use signup_ui::{
    component::form,
    theme::{Mode, Theme},
    widget::Element,
};

pub use message::Message;
pub use route::Route;
use state::{LoginState, RegistrationState, Screen, SubmissionId};
use toast::Toasts;

use crate::services::registration::{
    RegistrationAccepted, RegistrationClient, RegistrationError, RegistrationRequest,
};

pub const SUCCESS_TITLE: &str = "Registration successful";
pub const SUCCESS_DESCRIPTION: &str = "Your account has been created. You can now log in.";
pub const FAILURE_TITLE: &str = "Registration failed";

const TOAST_TICK: Duration = Duration::from_millis(500);

/// Routes between the registration and login screens and owns the notifications shown over
/// them.
pub struct App {
    client: RegistrationClient,
    screen: Screen,
    toasts: Toasts,
    theme: Mode,
    next_submission: u64,
}

impl App {
    pub fn new(client: RegistrationClient, config: &config::Config) -> (Self, Task<Message>) {
        let app = Self {
            client,
            screen: Screen::Register(RegistrationState::new()),
            toasts: Toasts::new(config.toast_timeout()),
            theme: config.theme.into(),
            next_submission: 0,
        };
        (app, form::focus(view::registration::NAME_INPUT_ID))
    }

    pub fn route(&self) -> Route {
        match self.screen {
            Screen::Register(_) => Route::Register,
            Screen::Login(_) => Route::Login,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn registration(&self) -> Option<&RegistrationState> {
        match &self.screen {
            Screen::Register(state) => Some(state),
            Screen::Login(_) => None,
        }
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn theme(&self) -> Theme {
        self.theme.into()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RegistrationUpdateName(v) => {
                self.with_registration(|s| s.on_update_name(v));
            }
            Message::RegistrationUpdateEmail(v) => {
                self.with_registration(|s| s.on_update_email(v));
            }
            Message::RegistrationUpdateCompanyName(v) => {
                self.with_registration(|s| s.on_update_company_name(v));
            }
            Message::RegistrationUpdatePassword(v) => {
                self.with_registration(|s| s.on_update_password(v));
            }
            Message::RegistrationTogglePassword => {
                self.with_registration(RegistrationState::on_toggle_password);
            }
            Message::RegistrationSubmit => return self.on_registration_submit(),
            Message::RegistrationResult(id, res) => return self.on_registration_result(id, res),

            Message::NavigateTo(route) => return self.navigate(route),

            Message::ToastDismiss(id) => self.toasts.dismiss(id),
            Message::ToastTick(now) => self.toasts.expire(now),

            Message::ThemeToggle => {
                self.theme = self.theme.toggled();
                debug!("Theme switched to {:?}", self.theme);
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content = match &self.screen {
            Screen::Register(state) => view::registration::registration_view(state),
            Screen::Login(state) => view::login::login_view(state),
        };
        view::layout(content, self.theme, &self.toasts)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.toasts.is_empty() {
            Subscription::none()
        } else {
            iced::time::every(TOAST_TICK).map(Message::ToastTick)
        }
    }

    fn with_registration<F: FnOnce(&mut RegistrationState)>(&mut self, f: F) {
        if let Screen::Register(state) = &mut self.screen {
            f(state);
        }
    }

    fn next_submission_id(&mut self) -> SubmissionId {
        let id = SubmissionId(self.next_submission);
        self.next_submission += 1;
        id
    }

    fn on_registration_submit(&mut self) -> Task<Message> {
        let id = self.next_submission_id();
        let request = match &mut self.screen {
            Screen::Register(state) => state.submit(id),
            Screen::Login(_) => None,
        };
        match request {
            Some(request) => {
                info!("Submitting registration for {}", request.email);
                self.register(id, request)
            }
            None => {
                debug!("Registration not submitted: form incomplete or already processing");
                Task::none()
            }
        }
    }

    fn register(&self, id: SubmissionId, request: RegistrationRequest) -> Task<Message> {
        let client = self.client.clone();
        Task::perform(
            async move { client.register(&request).await },
            move |res| Message::RegistrationResult(id, res),
        )
    }

    fn on_registration_result(
        &mut self,
        id: SubmissionId,
        res: Result<RegistrationAccepted, RegistrationError>,
    ) -> Task<Message> {
        let state = match &mut self.screen {
            Screen::Register(state) if state.is_pending(id) => state,
            _ => {
                debug!("Dropping result of submission {:?}: screen was left", id);
                return Task::none();
            }
        };

        match res {
            Ok(accepted) => {
                info!("Registration accepted with status {}", accepted.status);
                state.on_success();
                let email = state.email.value.clone();
                self.toasts.success(SUCCESS_TITLE, SUCCESS_DESCRIPTION);
                self.screen = Screen::Login(LoginState::after_registration(email));
                Task::none()
            }
            Err(e) => {
                warn!("Registration failed: {}", e);
                state.on_failure();
                self.toasts.error(FAILURE_TITLE, e.user_message());
                Task::none()
            }
        }
    }

    fn navigate(&mut self, route: Route) -> Task<Message> {
        debug!("Navigating to {}", route);
        match route {
            Route::Register => {
                self.screen = Screen::Register(RegistrationState::new());
                form::focus(view::registration::NAME_INPUT_ID)
            }
            Route::Login => {
                self.screen = Screen::Login(LoginState::new());
                Task::none()
            }
        }
    }
}
