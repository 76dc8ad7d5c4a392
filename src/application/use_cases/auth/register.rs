use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString},
};
use password_hash::rand_core::OsRng;

use crate::application::ports::user_repository::{CreateUserError, NewUser, UserRepository};
use crate::domain::users::{DEFAULT_ABOUT, DEFAULT_AVATAR, DEFAULT_NAME, User};

pub struct Register<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub about: Option<String>,
    pub avatar: Option<String>,
}

impl<'a, R: UserRepository + ?Sized> Register<'a, R> {
    pub async fn execute(&self, req: &RegisterRequest) -> Result<User, CreateUserError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(req.password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?
            .to_string();
        let input = NewUser {
            email: req.email.clone(),
            password_hash: hash,
            name: req.name.clone().unwrap_or_else(|| DEFAULT_NAME.into()),
            about: req.about.clone().unwrap_or_else(|| DEFAULT_ABOUT.into()),
            avatar: req.avatar.clone().unwrap_or_else(|| DEFAULT_AVATAR.into()),
        };
        self.repo.create(&input).await
    }
}
