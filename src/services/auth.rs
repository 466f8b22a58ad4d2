//! Admin authentication service.
//!
//! The catalog has a single shared admin password guarding the edit form.
//! The comparison lives server-side so the password is not shipped to the
//! browser; there are no users, sessions, or tokens.

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
};

#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Check the shared admin password.
    pub fn verify_password(&self, password: &str) -> AppResult<()> {
        if password == self.config.admin_password {
            Ok(())
        } else {
            Err(AppError::Unauthorized("Incorrect password".to_string()))
        }
    }
}
