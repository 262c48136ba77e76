pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

// Re-export necessary items
pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{issue_access_token, issue_refresh_token, verify_token, Claims};

lazy_static! {
    // local@domain shape: a non-empty local part, "@", and a domain with at
    // least one dot-separated segment.
    static ref EMAIL_REGEX: regex::Regex =
        regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref DIGIT_REGEX: regex::Regex = regex::Regex::new(r"[0-9]").unwrap();
}

/// Accepts only strings shaped like `local@domain`. Rejects a missing "@",
/// a missing domain segment, and the empty string.
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Password policy: 8 to 16 characters inclusive, at least one digit.
pub fn validate_password(password: &str) -> bool {
    let len = password.chars().count();
    (8..=16).contains(&len) && DIGIT_REGEX.is_match(password)
}

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

fn email_field(email: &str) -> Result<(), ValidationError> {
    if validate_email(email) {
        Ok(())
    } else {
        Err(validation_error("email", "Invalid Email"))
    }
}

fn password_field(password: &str) -> Result<(), ValidationError> {
    if validate_password(password) {
        Ok(())
    } else {
        Err(validation_error(
            "password",
            "The password must be between 8-16 characters and contain numbers",
        ))
    }
}

/// Payload for a login request. Shape checks only happen at registration;
/// login answers any credential mismatch with a uniform 401.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for a new user registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name; must be present and non-empty.
    #[validate(length(min = 1, message = "Missing attribute"))]
    pub name: String,
    /// Email address, validated against the `local@domain` shape.
    #[validate(custom = "email_field")]
    pub email: String,
    /// Password, validated against the 8-16 chars + digit policy.
    #[validate(custom = "password_field")]
    pub password: String,
}

/// Payload carrying a refresh token, used by the refresh and logout
/// endpoints. The refresh token itself is the credential here.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Token pair returned by a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived bearer token (1 hour).
    pub access_token: String,
    /// Long-lived, server-persisted, revocable token (365 days).
    pub refresh_token: String,
}

/// Payload of a successful refresh: a fresh access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
}
