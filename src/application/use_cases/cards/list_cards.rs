use crate::application::ports::card_repository::CardRepository;
use crate::domain::cards::Card;

pub struct ListCards<'a, R: CardRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CardRepository + ?Sized> ListCards<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<Vec<Card>> {
        self.repo.find_all().await
    }
}
