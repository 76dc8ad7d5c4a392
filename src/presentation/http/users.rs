use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::users::get_user::GetUser;
use crate::application::use_cases::users::list_users::ListUsers;
use crate::application::use_cases::users::update_avatar::UpdateAvatar;
use crate::application::use_cases::users::update_profile::UpdateProfile;
use crate::bootstrap::app_context::AppContext;
use crate::domain::users::User;
use crate::presentation::http::auth::Identity;
use crate::presentation::http::error::ApiError;
use crate::presentation::http::validation;

/// User as serialized to clients; the password hash never appears here.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserBody {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub about: String,
    pub avatar: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserBody {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            name: u.name,
            about: u.about,
            avatar: u.avatar,
            created_at: u.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub about: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAvatarRequest {
    pub avatar: Option<String>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(list_users))
        .route("/me", get(get_current_user).patch(update_profile))
        .route("/me/avatar", patch(update_avatar))
        .route("/:userId", get(get_user_by_id))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/users", tag = "Users", responses((status = 200, body = [UserBody])))]
pub async fn list_users(
    State(ctx): State<AppContext>,
    _identity: Identity,
) -> Result<Json<Vec<UserBody>>, ApiError> {
    let repo = ctx.user_repo();
    let uc = ListUsers {
        repo: repo.as_ref(),
    };
    let users = uc.execute().await?;
    Ok(Json(users.into_iter().map(UserBody::from).collect()))
}

#[utoipa::path(get, path = "/users/me", tag = "Users", responses((status = 200, body = UserBody)))]
pub async fn get_current_user(
    State(ctx): State<AppContext>,
    Identity(user_id): Identity,
) -> Result<Json<UserBody>, ApiError> {
    let repo = ctx.user_repo();
    let uc = GetUser {
        repo: repo.as_ref(),
    };
    let user = uc
        .execute(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Пользователь не найден".into()))?;
    Ok(Json(user.into()))
}

#[utoipa::path(get, path = "/users/{userId}", tag = "Users",
    params(("userId" = String, Path, description = "User id")),
    responses((status = 200, body = UserBody)))]
pub async fn get_user_by_id(
    State(ctx): State<AppContext>,
    _identity: Identity,
    Path(user_id): Path<String>,
) -> Result<Json<UserBody>, ApiError> {
    let user_id = Uuid::parse_str(&user_id)
        .map_err(|_| ApiError::BadRequest("Передан некорректный _id пользователя".into()))?;
    let repo = ctx.user_repo();
    let uc = GetUser {
        repo: repo.as_ref(),
    };
    let user = uc
        .execute(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Пользователь по указанному _id не найден.".into()))?;
    Ok(Json(user.into()))
}

#[utoipa::path(patch, path = "/users/me", tag = "Users", request_body = UpdateProfileRequest,
    responses((status = 200, body = UserBody)))]
pub async fn update_profile(
    State(ctx): State<AppContext>,
    Identity(user_id): Identity,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserBody>, ApiError> {
    validation::validate_profile(req.name.as_deref(), req.about.as_deref()).map_err(|_| {
        ApiError::BadRequest("Переданы некорректные данные при обновлении профиля".into())
    })?;
    // Checked above, both fields present.
    let (name, about) = (req.name.unwrap_or_default(), req.about.unwrap_or_default());
    let repo = ctx.user_repo();
    let uc = UpdateProfile {
        repo: repo.as_ref(),
    };
    let user = uc
        .execute(user_id, &name, &about)
        .await?
        .ok_or_else(|| ApiError::NotFound("Пользователь с указанным _id не найден".into()))?;
    Ok(Json(user.into()))
}

#[utoipa::path(patch, path = "/users/me/avatar", tag = "Users", request_body = UpdateAvatarRequest,
    responses((status = 200, body = UserBody)))]
pub async fn update_avatar(
    State(ctx): State<AppContext>,
    Identity(user_id): Identity,
    Json(req): Json<UpdateAvatarRequest>,
) -> Result<Json<UserBody>, ApiError> {
    validation::validate_avatar(req.avatar.as_deref()).map_err(|_| {
        ApiError::BadRequest("Переданы некорректные данные при обновлении аватара".into())
    })?;
    let avatar = req.avatar.unwrap_or_default();
    let repo = ctx.user_repo();
    let uc = UpdateAvatar {
        repo: repo.as_ref(),
    };
    let user = uc
        .execute(user_id, &avatar)
        .await?
        .ok_or_else(|| ApiError::NotFound("Пользователь с указанным _id не найден".into()))?;
    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::http::StatusCode;

    use crate::application::use_cases::test_support::{
        InMemoryCardRepository, InMemoryUserRepository,
    };
    use crate::bootstrap::config::Config;

    fn test_ctx() -> AppContext {
        let cfg = Config {
            port: 3000,
            database_url: "postgres://unused".into(),
            jwt_secret: "unit-test-secret".into(),
            frontend_url: None,
            is_production: false,
        };
        AppContext::new(
            cfg,
            Arc::new(InMemoryUserRepository::default()),
            Arc::new(InMemoryCardRepository::default()),
        )
    }

    #[tokio::test]
    async fn malformed_user_id_is_a_bad_request() {
        let ctx = test_ctx();
        let err = get_user_by_id(
            State(ctx),
            Identity(Uuid::new_v4()),
            Path("24-hex-or-not-an-id".into()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Передан некорректный _id пользователя");
    }

    #[tokio::test]
    async fn well_formed_but_absent_user_id_is_not_found() {
        let ctx = test_ctx();
        let err = get_user_by_id(
            State(ctx),
            Identity(Uuid::new_v4()),
            Path(Uuid::new_v4().to_string()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Пользователь по указанному _id не найден.");
    }
}
