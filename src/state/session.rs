#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Session state holding the bearer token.
///
/// The in-memory token decides which page renders; the persisted copy in
/// localStorage is what outgoing requests actually send (see
/// `util::token_store`), so the two are always written together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
}

impl SessionState {
    /// Rebuild the session from a previously persisted token.
    pub fn restore(token: Option<String>) -> Self {
        Self { token }
    }

    /// Commit a freshly issued token after a successful login.
    pub fn login(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Drop the session token.
    pub fn logout(&mut self) {
        self.token = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Which endpoint the auth screen submits to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }
}
