//! In-memory port implementations for use-case tests. They mirror the
//! storage-level guarantees the SQL repositories lean on: a unique email
//! index and set semantics for card likes.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::card_repository::CardRepository;
use crate::application::ports::user_repository::{
    CreateUserError, Credentials, NewUser, UserRepository,
};
use crate::domain::cards::Card;
use crate::domain::users::User;

#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<(User, String)>>,
}

impl InMemoryUserRepository {
    pub fn credentials(&self, email: &str) -> Option<Credentials> {
        let rows = self.rows.lock().unwrap();
        rows.iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, hash)| Credentials {
                user: u.clone(),
                password_hash: hash.clone(),
            })
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, input: &NewUser) -> Result<User, CreateUserError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|(u, _)| u.email == input.email) {
            return Err(CreateUserError::DuplicateEmail);
        }
        let user = User {
            id: Uuid::new_v4(),
            email: input.email.clone(),
            name: input.name.clone(),
            about: input.about.clone(),
            avatar: input.avatar.clone(),
            created_at: chrono::Utc::now(),
        };
        rows.push((user.clone(), input.password_hash.clone()));
        Ok(user)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().map(|(u, _)| u.clone()).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|(u, _)| u.id == id).map(|(u, _)| u.clone()))
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> anyhow::Result<Option<Credentials>> {
        Ok(self.credentials(email))
    }

    async fn update_profile(
        &self,
        id: Uuid,
        name: &str,
        about: &str,
    ) -> anyhow::Result<Option<User>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|(u, _)| u.id == id).map(|(u, _)| {
            u.name = name.to_string();
            u.about = about.to_string();
            u.clone()
        }))
    }

    async fn update_avatar(&self, id: Uuid, avatar: &str) -> anyhow::Result<Option<User>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|(u, _)| u.id == id).map(|(u, _)| {
            u.avatar = avatar.to_string();
            u.clone()
        }))
    }
}

#[derive(Default)]
pub struct InMemoryCardRepository {
    rows: Mutex<Vec<Card>>,
}

#[async_trait]
impl CardRepository for InMemoryCardRepository {
    async fn create(&self, name: &str, link: &str, owner: Uuid) -> anyhow::Result<Card> {
        let card = Card {
            id: Uuid::new_v4(),
            name: name.to_string(),
            link: link.to_string(),
            owner,
            likes: Vec::new(),
            created_at: chrono::Utc::now(),
        };
        self.rows.lock().unwrap().push(card.clone());
        Ok(card)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Card>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Card>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|c| c.id == id).cloned())
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        Ok(rows.len() < before)
    }

    async fn add_like(&self, id: Uuid, user: Uuid) -> anyhow::Result<Option<Card>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|c| c.id == id).map(|c| {
            if !c.likes.contains(&user) {
                c.likes.push(user);
            }
            c.clone()
        }))
    }

    async fn remove_like(&self, id: Uuid, user: Uuid) -> anyhow::Result<Option<Card>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|c| c.id == id).map(|c| {
            c.likes.retain(|u| *u != user);
            c.clone()
        }))
    }
}
