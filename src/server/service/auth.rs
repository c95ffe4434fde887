//! Account registration and login.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{validation::ValidationError, AppError},
    model::user::{LoginParams, SignupParams, User},
    util::password::{hash_password, verify_password},
};

const USERNAME_TAKEN: &str = "A user with that username already exists.";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::ValidationErr)` - The username is already taken
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn signup(&self, params: SignupParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.username_exists(&params.username).await? {
            return Err(ValidationError(vec![USERNAME_TAKEN.to_string()]).into());
        }

        let password_hash = hash_password(&params.password)?;

        // A concurrent signup can still win the race between the check and the insert.
        match repo.create(params.username, password_hash).await {
            Ok(user) => Ok(user),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(ValidationError(vec![USERNAME_TAKEN.to_string()]).into())
                }
                _ => Err(err.into()),
            },
        }
    }

    /// Checks login credentials.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Username exists and the password matches
    /// - `Ok(None)` - Unknown username or wrong password
    pub async fn login(&self, params: LoginParams) -> Result<Option<User>, AppError> {
        let Some((user, password_hash)) = UserRepository::new(self.db)
            .find_with_password_hash(&params.username)
            .await?
        else {
            return Ok(None);
        };

        if !verify_password(&params.password, &password_hash) {
            return Ok(None);
        }

        Ok(Some(user))
    }
}
