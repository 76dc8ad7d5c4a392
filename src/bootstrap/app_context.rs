use std::sync::Arc;

use crate::application::ports::card_repository::CardRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    users: Arc<dyn UserRepository>,
    cards: Arc<dyn CardRepository>,
}

impl AppContext {
    pub fn new(
        cfg: Config,
        users: Arc<dyn UserRepository>,
        cards: Arc<dyn CardRepository>,
    ) -> Self {
        Self { cfg, users, cards }
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    pub fn card_repo(&self) -> Arc<dyn CardRepository> {
        self.cards.clone()
    }
}
