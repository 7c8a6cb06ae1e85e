/// State for the login view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    /// Email of the account that was just created, if we come from the registration screen.
    pub registered_email: Option<String>,
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn after_registration(email: String) -> Self {
        Self {
            registered_email: Some(email),
        }
    }
}
