use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::user_repository::{
    CreateUserError, Credentials, NewUser, UserRepository,
};
use crate::domain::users::User;
use crate::infrastructure::db::PgPool;

const USER_COLUMNS: &str = "id, email, name, about, avatar, created_at";

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_user(row: &PgRow) -> User {
    User {
        id: row.get("id"),
        email: row.get("email"),
        name: row.get("name"),
        about: row.get("about"),
        avatar: row.get("avatar"),
        created_at: row.get("created_at"),
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.code().as_deref() == Some("23505"),
        _ => false,
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create(&self, input: &NewUser) -> Result<User, CreateUserError> {
        let sql = format!(
            "INSERT INTO users (email, password_hash, name, about, avatar)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {USER_COLUMNS}"
        );
        let res = sqlx::query(&sql)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.name)
            .bind(&input.about)
            .bind(&input.avatar)
            .fetch_one(&self.pool)
            .await;
        match res {
            Ok(row) => Ok(map_user(&row)),
            Err(e) if is_unique_violation(&e) => Err(CreateUserError::DuplicateEmail),
            Err(e) => Err(CreateUserError::Storage(e.into())),
        }
    }

    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(map_user).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(row.as_ref().map(map_user))
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> anyhow::Result<Option<Credentials>> {
        let sql = format!("SELECT {USER_COLUMNS}, password_hash FROM users WHERE email = $1");
        let row = sqlx::query(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| Credentials {
            user: map_user(&r),
            password_hash: r.get("password_hash"),
        }))
    }

    async fn update_profile(
        &self,
        id: Uuid,
        name: &str,
        about: &str,
    ) -> anyhow::Result<Option<User>> {
        let sql = format!(
            "UPDATE users SET name = $2, about = $3 WHERE id = $1 RETURNING {USER_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(name)
            .bind(about)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(map_user))
    }

    async fn update_avatar(&self, id: Uuid, avatar: &str) -> anyhow::Result<Option<User>> {
        let sql =
            format!("UPDATE users SET avatar = $2 WHERE id = $1 RETURNING {USER_COLUMNS}");
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(avatar)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(map_user))
    }
}
