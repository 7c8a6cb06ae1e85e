#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Register,
    Login,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Register => "/auth/register",
            Self::Login => "/auth/login",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(Route::Register.path(), "/auth/register");
        assert_eq!(Route::Login.to_string(), "/auth/login");
    }
}
