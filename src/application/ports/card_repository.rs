use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cards::Card;

#[async_trait]
pub trait CardRepository: Send + Sync {
    async fn create(&self, name: &str, link: &str, owner: Uuid) -> anyhow::Result<Card>;
    async fn find_all(&self) -> anyhow::Result<Vec<Card>>;
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Card>>;
    /// Returns whether a card was actually removed.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
    /// Adds `user` to the likes set in a single atomic statement. Liking an
    /// already-liked card leaves the set unchanged. `None` means no such card.
    async fn add_like(&self, id: Uuid, user: Uuid) -> anyhow::Result<Option<Card>>;
    /// Removes `user` from the likes set; a no-op when the user never liked
    /// the card. `None` means no such card.
    async fn remove_like(&self, id: Uuid, user: Uuid) -> anyhow::Result<Option<Card>>;
}
