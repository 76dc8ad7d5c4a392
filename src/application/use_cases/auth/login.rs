use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};

use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::User;

pub struct Login<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl<'a, R: UserRepository + ?Sized> Login<'a, R> {
    /// `None` covers both unknown email and wrong password so the caller
    /// cannot tell the two apart.
    pub async fn execute(&self, req: &LoginRequest) -> anyhow::Result<Option<User>> {
        let creds = match self.repo.find_credentials_by_email(&req.email).await? {
            Some(c) => c,
            None => return Ok(None),
        };
        let parsed = match PasswordHash::new(&creds.password_hash) {
            Ok(p) => p,
            Err(_) => return Ok(None),
        };
        if Argon2::default()
            .verify_password(req.password.as_bytes(), &parsed)
            .is_ok()
        {
            Ok(Some(creds.user))
        } else {
            Ok(None)
        }
    }
}
