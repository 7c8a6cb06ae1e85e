pub mod login;
pub mod registration;

pub use login::LoginState;
pub use registration::{Phase, RegistrationState, SubmissionId};

/// The screen currently displayed, with its local state.
#[derive(Debug, Clone)]
pub enum Screen {
    Register(RegistrationState),
    Login(LoginState),
}
