use std::time::Instant;

use crate::{
    app::{route::Route, state::registration::SubmissionId, toast::ToastId},
    services::registration::{RegistrationAccepted, RegistrationError},
};

/// All application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Registration form
    RegistrationUpdateName(String),
    RegistrationUpdateEmail(String),
    RegistrationUpdateCompanyName(String),
    RegistrationUpdatePassword(String),
    RegistrationTogglePassword,
    RegistrationSubmit,
    RegistrationResult(
        SubmissionId,
        Result<RegistrationAccepted, RegistrationError>,
    ),

    // Navigation
    NavigateTo(Route),

    // Notifications
    ToastDismiss(ToastId),
    ToastTick(Instant),

    ThemeToggle,
}
