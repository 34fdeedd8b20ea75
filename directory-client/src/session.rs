//! Session context
//!
//! Explicit identity context with a set-at-login, clear-at-logout
//! lifecycle. The controller receives the user from here once at
//! construction instead of reading ambient session storage per render.

use shared::client::SessionUser;

/// Current operator session
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    user: Option<SessionUser>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Establish the session (called once after a successful login)
    pub fn login(&mut self, user: SessionUser) {
        tracing::debug!(user_id = %user.id, "session established");
        self.user = Some(user);
    }

    /// Clear the session (called at logout)
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::debug!(user_id = %user.id, "session cleared");
        }
    }

    /// Currently logged-in operator, if any
    pub fn current_user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Role;

    #[test]
    fn test_session_lifecycle() {
        let mut session = SessionContext::new();
        assert!(session.current_user().is_none());

        session.login(SessionUser {
            id: "u1".to_string(),
            role: Role::Admin,
            department: None,
        });
        assert_eq!(session.current_user().unwrap().id, "u1");

        session.logout();
        assert!(session.current_user().is_none());
    }
}
