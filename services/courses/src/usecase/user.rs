use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};

use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User};
use crate::error::CoursesServiceError;
use crate::usecase::non_blank;

/// Hash a raw password into an argon2 PHC string with a fresh random salt.
pub fn hash_password(raw: &str) -> Result<String, CoursesServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(raw.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("hash password: {e}"))?;
    Ok(hash.to_string())
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, CoursesServiceError> {
        let username = non_blank(input.username).ok_or(CoursesServiceError::MissingData)?;
        // Passwords are taken verbatim; only an all-blank one is rejected.
        let password = input
            .password
            .filter(|p| !p.trim().is_empty())
            .ok_or(CoursesServiceError::MissingData)?;
        if self.repo.exists_by_username(&username).await? {
            return Err(CoursesServiceError::UserAlreadyExists);
        }
        let new_user = NewUser {
            username,
            password_hash: hash_password(&password)?,
            email: non_blank(input.email).unwrap_or_default(),
            first_name: non_blank(input.first_name).unwrap_or_default(),
            last_name: non_blank(input.last_name).unwrap_or_default(),
        };
        self.repo.create(&new_user).await
    }
}
