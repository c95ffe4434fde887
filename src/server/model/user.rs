//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::auth::{LoginDto, SignupDto},
    server::error::validation::ValidationError,
};

pub const USERNAME_MAX_LEN: usize = 150;
pub const PASSWORD_MIN_LEN: usize = 8;

/// An account that owns birds.
///
/// The password hash never leaves the data layer except for login verification.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub date_joined: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            date_joined: entity.date_joined,
        }
    }
}

/// Validated signup submission.
#[derive(Debug, Clone)]
pub struct SignupParams {
    pub username: String,
    pub password: String,
}

impl SignupParams {
    /// Validates a signup form.
    ///
    /// # Returns
    /// - `Ok(SignupParams)` - Username is well formed, password long enough and confirmed
    /// - `Err(ValidationError)` - One message per failed constraint
    pub fn from_dto(dto: SignupDto) -> Result<Self, ValidationError> {
        let username = dto.username.trim().to_string();
        let mut errors = Vec::new();

        if username.is_empty() {
            errors.push("Username is required.".to_string());
        } else if username.chars().count() > USERNAME_MAX_LEN {
            errors.push(format!(
                "Username may be at most {} characters.",
                USERNAME_MAX_LEN
            ));
        } else if !username
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
        {
            errors.push("Username may only contain letters, digits and @/./+/-/_.".to_string());
        }

        if dto.password1.chars().count() < PASSWORD_MIN_LEN {
            errors.push(format!(
                "Password must be at least {} characters.",
                PASSWORD_MIN_LEN
            ));
        }
        if dto.password1 != dto.password2 {
            errors.push("The two password fields didn't match.".to_string());
        }

        ValidationError::check(errors)?;

        Ok(Self {
            username,
            password: dto.password1,
        })
    }
}

/// Login submission; only presence is checked, the hash decides the rest.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Result<Self, ValidationError> {
        let username = dto.username.trim().to_string();
        let mut errors = Vec::new();

        if username.is_empty() {
            errors.push("Username is required.".to_string());
        }
        if dto.password.is_empty() {
            errors.push("Password is required.".to_string());
        }

        ValidationError::check(errors)?;

        Ok(Self {
            username,
            password: dto.password,
        })
    }
}
