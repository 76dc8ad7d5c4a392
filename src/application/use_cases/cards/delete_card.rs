use uuid::Uuid;

use crate::application::ports::card_repository::CardRepository;

#[derive(thiserror::Error, Debug)]
pub enum DeleteCardError {
    #[error("card not found")]
    NotFound,
    #[error("only the owner may delete a card")]
    NotOwner,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub struct DeleteCard<'a, R: CardRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CardRepository + ?Sized> DeleteCard<'a, R> {
    pub async fn execute(&self, card_id: Uuid, actor: Uuid) -> Result<(), DeleteCardError> {
        let card = self
            .repo
            .find_by_id(card_id)
            .await?
            .ok_or(DeleteCardError::NotFound)?;
        if card.owner != actor {
            return Err(DeleteCardError::NotOwner);
        }
        // A concurrent delete may win the race; treat it as already gone.
        if !self.repo.delete(card_id).await? {
            return Err(DeleteCardError::NotFound);
        }
        Ok(())
    }
}
