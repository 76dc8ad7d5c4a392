use uuid::Uuid;

use crate::application::ports::card_repository::CardRepository;
use crate::domain::cards::Card;

pub struct CreateCard<'a, R: CardRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CardRepository + ?Sized> CreateCard<'a, R> {
    pub async fn execute(&self, name: &str, link: &str, owner: Uuid) -> anyhow::Result<Card> {
        self.repo.create(name, link, owner).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::InMemoryCardRepository;

    #[tokio::test]
    async fn new_card_belongs_to_creator_and_starts_unliked() {
        let repo = InMemoryCardRepository::default();
        let owner = Uuid::new_v4();
        let uc = CreateCard { repo: &repo };

        let card = uc
            .execute("Ridge", "https://example.com/a.jpg", owner)
            .await
            .unwrap();

        assert_eq!(card.owner, owner);
        assert!(card.likes.is_empty());

        let listed = repo.find_all().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, card.id);
        assert_eq!(listed[0].link, "https://example.com/a.jpg");
    }
}
