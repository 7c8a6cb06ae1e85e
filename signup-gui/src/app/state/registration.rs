use signup_ui::component::form;

use crate::services::registration::RegistrationRequest;

pub const REQUIRED_FIELD_WARNING: &str = "This field is required";

/// Identifies one submission, so that a late response can be matched against the screen that
/// is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting(SubmissionId),
    /// Terminal: the app navigates away from the registration screen.
    Succeeded,
}

/// State for the registration view
#[derive(Debug, Clone, Default)]
pub struct RegistrationState {
    pub name: form::Value<String>,
    pub email: form::Value<String>,
    pub company_name: form::Value<String>,
    pub password: form::Value<String>,
    pub show_password: bool,
    phase: Phase,
}

fn set(field: &mut form::Value<String>, value: String) {
    field.value = value;
    if !field.value.is_empty() {
        field.valid = true;
        field.warning = None;
    }
}

impl RegistrationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// A request is outstanding, or the registration went through.
    pub fn is_processing(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn is_pending(&self, id: SubmissionId) -> bool {
        self.phase == Phase::Submitting(id)
    }

    fn fields_mut(&mut self) -> [&mut form::Value<String>; 4] {
        [
            &mut self.name,
            &mut self.email,
            &mut self.company_name,
            &mut self.password,
        ]
    }

    pub fn on_update_name(&mut self, name: String) {
        set(&mut self.name, name);
    }

    pub fn on_update_email(&mut self, email: String) {
        set(&mut self.email, email);
    }

    pub fn on_update_company_name(&mut self, company_name: String) {
        set(&mut self.company_name, company_name);
    }

    pub fn on_update_password(&mut self, password: String) {
        set(&mut self.password, password);
    }

    pub fn on_toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Starts a submission and returns the request to send, unless a submission is already
    /// running or a required field is empty. Empty fields are flagged.
    pub fn submit(&mut self, id: SubmissionId) -> Option<RegistrationRequest> {
        if self.is_processing() {
            return None;
        }

        let mut complete = true;
        for field in self.fields_mut() {
            if field.is_empty() {
                field.invalidate(REQUIRED_FIELD_WARNING);
                complete = false;
            }
        }
        if !complete {
            return None;
        }

        self.phase = Phase::Submitting(id);
        Some(RegistrationRequest {
            name: self.name.value.clone(),
            email: self.email.value.clone(),
            password: self.password.value.clone(),
            company_name: self.company_name.value.clone(),
        })
    }

    pub fn on_success(&mut self) {
        self.phase = Phase::Succeeded;
    }

    /// Back to idle, keeping every input so the user can fix and retry.
    pub fn on_failure(&mut self) {
        self.phase = Phase::Idle;
    }
}
