use uuid::Uuid;

use crate::application::ports::card_repository::CardRepository;
use crate::domain::cards::Card;

pub struct DislikeCard<'a, R: CardRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CardRepository + ?Sized> DislikeCard<'a, R> {
    /// `None` when the card does not exist. Removing a like that was never
    /// set is not an error.
    pub async fn execute(&self, card_id: Uuid, user_id: Uuid) -> anyhow::Result<Option<Card>> {
        self.repo.remove_like(card_id, user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::cards::like_card::LikeCard;
    use crate::application::use_cases::test_support::InMemoryCardRepository;

    #[tokio::test]
    async fn removes_an_existing_like() {
        let repo = InMemoryCardRepository::default();
        let card = repo
            .create("Ridge", "https://example.com/a.jpg", Uuid::new_v4())
            .await
            .unwrap();
        let fan = Uuid::new_v4();
        LikeCard { repo: &repo }.execute(card.id, fan).await.unwrap();

        let updated = DislikeCard { repo: &repo }
            .execute(card.id, fan)
            .await
            .unwrap()
            .unwrap();

        assert!(updated.likes.is_empty());
    }

    #[tokio::test]
    async fn disliking_without_a_prior_like_changes_nothing() {
        let repo = InMemoryCardRepository::default();
        let card = repo
            .create("Ridge", "https://example.com/a.jpg", Uuid::new_v4())
            .await
            .unwrap();
        let fan = Uuid::new_v4();
        LikeCard { repo: &repo }.execute(card.id, fan).await.unwrap();

        let updated = DislikeCard { repo: &repo }
            .execute(card.id, Uuid::new_v4())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.likes, vec![fan]);
    }
}
