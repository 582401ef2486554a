//! Registration form
//!
//! Validates the sign-up form. There is no account backend: an accepted
//! registration is only logged.

use std::sync::LazyLock;

use regex::Regex;
use tracing::info;

use crate::error::FieldError;
use crate::{Error, Result};

/// Shortest password the form accepts
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex")
});

/// Raw values as typed into the form
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// A registration that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    /// Trimmed and lowercased
    pub email: String,
}

impl RegistrationForm {
    /// Check every field, reporting all failures at once.
    pub fn validate(&self) -> Result<Registration> {
        let mut errors = Vec::new();

        let first_name = self.first_name.trim();
        if first_name.is_empty() {
            errors.push(FieldError::new("first_name", "is required"));
        }
        let last_name = self.last_name.trim();
        if last_name.is_empty() {
            errors.push(FieldError::new("last_name", "is required"));
        }

        let email = self.email.trim().to_lowercase();
        if email.is_empty() {
            errors.push(FieldError::new("email", "is required"));
        } else if !EMAIL.is_match(&email) {
            errors.push(FieldError::new("email", "is not a valid address"));
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(FieldError::new(
                "password",
                format!("must be at least {MIN_PASSWORD_LEN} characters"),
            ));
        } else if !self.password.chars().any(char::is_alphabetic)
            || !self.password.chars().any(|c| c.is_ascii_digit())
        {
            errors.push(FieldError::new(
                "password",
                "must contain a letter and a digit",
            ));
        }

        if self.confirm_password != self.password {
            errors.push(FieldError::new("confirm_password", "does not match password"));
        }

        if !errors.is_empty() {
            return Err(Error::Validation(errors));
        }

        Ok(Registration {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email,
        })
    }
}

impl Registration {
    /// Submit the registration. Only logged; nothing is stored.
    pub fn submit(&self) {
        info!(
            email = %self.email,
            "Registration received for {} {}",
            self.first_name,
            self.last_name
        );
    }
}
