//! Password login form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::{FieldErrors, is_valid_email, require};
use crate::net::types::LoginRequest;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns per-field messages when the email or password is missing or malformed.
    pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        let username = require(&mut errors, "username", &self.username, "Email is required");
        if !username.is_empty() && !is_valid_email(&username) {
            errors.insert("username", "Enter a valid email".to_owned());
        }
        if self.password.is_empty() {
            errors.insert("password", "Password is required".to_owned());
        }
        if errors.is_empty() {
            Ok(LoginRequest { username, password: self.password.clone() })
        } else {
            Err(errors)
        }
    }
}
