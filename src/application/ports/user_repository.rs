use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::users::User;

/// Registration payload with defaults already applied and the password hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub about: String,
    pub avatar: String,
}

/// Result of looking a user up for credential comparison. The hash is only
/// surfaced through this type; `User` never carries it.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user: User,
    pub password_hash: String,
}

#[derive(thiserror::Error, Debug)]
pub enum CreateUserError {
    #[error("email is already taken")]
    DuplicateEmail,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Relies on the store's unique index on email; a duplicate insert must
    /// surface as `DuplicateEmail`, not as a generic storage failure.
    async fn create(&self, input: &NewUser) -> Result<User, CreateUserError>;
    async fn find_all(&self) -> anyhow::Result<Vec<User>>;
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;
    async fn find_credentials_by_email(&self, email: &str)
    -> anyhow::Result<Option<Credentials>>;
    async fn update_profile(
        &self,
        id: Uuid,
        name: &str,
        about: &str,
    ) -> anyhow::Result<Option<User>>;
    async fn update_avatar(&self, id: Uuid, avatar: &str) -> anyhow::Result<Option<User>>;
}
