use uuid::Uuid;

use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::User;

pub struct UpdateAvatar<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> UpdateAvatar<'a, R> {
    pub async fn execute(&self, user_id: Uuid, avatar: &str) -> anyhow::Result<Option<User>> {
        self.repo.update_avatar(user_id, avatar).await
    }
}
