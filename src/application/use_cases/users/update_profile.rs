use uuid::Uuid;

use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::User;

pub struct UpdateProfile<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> UpdateProfile<'a, R> {
    /// `None` when the caller's record no longer exists.
    pub async fn execute(
        &self,
        user_id: Uuid,
        name: &str,
        about: &str,
    ) -> anyhow::Result<Option<User>> {
        self.repo.update_profile(user_id, name, about).await
    }
}
