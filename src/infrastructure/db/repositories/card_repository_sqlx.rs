use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::card_repository::CardRepository;
use crate::domain::cards::Card;
use crate::infrastructure::db::PgPool;

const CARD_COLUMNS: &str = "id, name, link, owner, likes, created_at";

pub struct SqlxCardRepository {
    pub pool: PgPool,
}

impl SqlxCardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_card(row: &PgRow) -> Card {
    Card {
        id: row.get("id"),
        name: row.get("name"),
        link: row.get("link"),
        owner: row.get("owner"),
        likes: row.get("likes"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl CardRepository for SqlxCardRepository {
    async fn create(&self, name: &str, link: &str, owner: Uuid) -> anyhow::Result<Card> {
        let sql = format!(
            "INSERT INTO cards (name, link, owner) VALUES ($1, $2, $3) RETURNING {CARD_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(name)
            .bind(link)
            .bind(owner)
            .fetch_one(&self.pool)
            .await?;
        Ok(map_card(&row))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Card>> {
        let sql = format!("SELECT {CARD_COLUMNS} FROM cards ORDER BY created_at");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(map_card).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Card>> {
        let sql = format!("SELECT {CARD_COLUMNS} FROM cards WHERE id = $1");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(row.as_ref().map(map_card))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM cards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    // Both like mutations are single atomic statements so concurrent
    // requests cannot produce duplicates or lost updates.
    async fn add_like(&self, id: Uuid, user: Uuid) -> anyhow::Result<Option<Card>> {
        let sql = format!(
            "UPDATE cards
             SET likes = CASE WHEN $2 = ANY(likes) THEN likes ELSE array_append(likes, $2) END
             WHERE id = $1
             RETURNING {CARD_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(user)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(map_card))
    }

    async fn remove_like(&self, id: Uuid, user: Uuid) -> anyhow::Result<Option<Card>> {
        let sql = format!(
            "UPDATE cards SET likes = array_remove(likes, $2)
             WHERE id = $1
             RETURNING {CARD_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(user)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(map_card))
    }
}
