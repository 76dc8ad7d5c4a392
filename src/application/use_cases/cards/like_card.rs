use uuid::Uuid;

use crate::application::ports::card_repository::CardRepository;
use crate::domain::cards::Card;

pub struct LikeCard<'a, R: CardRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CardRepository + ?Sized> LikeCard<'a, R> {
    /// `None` when the card does not exist.
    pub async fn execute(&self, card_id: Uuid, user_id: Uuid) -> anyhow::Result<Option<Card>> {
        self.repo.add_like(card_id, user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::InMemoryCardRepository;

    #[tokio::test]
    async fn liking_twice_keeps_a_single_entry() {
        let repo = InMemoryCardRepository::default();
        let card = repo
            .create("Ridge", "https://example.com/a.jpg", Uuid::new_v4())
            .await
            .unwrap();
        let fan = Uuid::new_v4();

        let uc = LikeCard { repo: &repo };
        uc.execute(card.id, fan).await.unwrap();
        let updated = uc.execute(card.id, fan).await.unwrap().unwrap();

        assert_eq!(updated.likes, vec![fan]);
    }

    #[tokio::test]
    async fn missing_card_yields_none() {
        let repo = InMemoryCardRepository::default();
        let uc = LikeCard { repo: &repo };
        assert!(uc
            .execute(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap()
            .is_none());
    }
}
