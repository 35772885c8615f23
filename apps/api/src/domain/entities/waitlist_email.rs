use crate::{
    app_error::{AppError, AppResult},
    application::validators::is_valid_email,
};

pub const INVALID_EMAIL_MESSAGE: &str = "Valid email is required";

/// An email address that passed validation, in normalized form.
///
/// Holding one of these is the only way to reach the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let normalized = normalize_email(raw);
        if !is_valid_email(&normalized) {
            return Err(AppError::InvalidInput(INVALID_EMAIL_MESSAGE.into()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when `stored` names the same mailbox once normalized.
    pub fn matches(&self, stored: &str) -> bool {
        normalize_email(stored) == self.0
    }
}

impl AsRef<str> for WaitlistEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WaitlistEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Uniqueness key: surrounding whitespace removed, lower-cased.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
