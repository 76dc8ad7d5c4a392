use uuid::Uuid;

use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::User;

/// Serves both `/users/me` and `/users/{userId}`; the handlers differ only in
/// where the id comes from and which not-found message they attach.
pub struct GetUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> GetUser<'a, R> {
    pub async fn execute(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        self.repo.find_by_id(id).await
    }
}
