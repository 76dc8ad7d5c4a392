use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::cards::create_card::CreateCard;
use crate::application::use_cases::cards::delete_card::{DeleteCard, DeleteCardError};
use crate::application::use_cases::cards::dislike_card::DislikeCard;
use crate::application::use_cases::cards::like_card::LikeCard;
use crate::application::use_cases::cards::list_cards::ListCards;
use crate::bootstrap::app_context::AppContext;
use crate::domain::cards::Card;
use crate::presentation::http::auth::Identity;
use crate::presentation::http::error::ApiError;
use crate::presentation::http::validation;

const CARD_NOT_FOUND: &str = "Карточка с указанным _id не найдена";

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardBody {
    pub id: Uuid,
    pub name: String,
    pub link: String,
    pub owner: Uuid,
    pub likes: Vec<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Card> for CardBody {
    fn from(c: Card) -> Self {
        Self {
            id: c.id,
            name: c.name,
            link: c.link,
            owner: c.owner,
            likes: c.likes,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCardRequest {
    pub name: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteCardResponse {
    pub message: String,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(list_cards).post(create_card))
        .route("/:cardId", axum::routing::delete(delete_card))
        .route(
            "/:cardId/likes",
            axum::routing::put(like_card).delete(dislike_card),
        )
        .with_state(ctx)
}

#[utoipa::path(get, path = "/cards", tag = "Cards", responses((status = 200, body = [CardBody])))]
pub async fn list_cards(
    State(ctx): State<AppContext>,
    _identity: Identity,
) -> Result<Json<Vec<CardBody>>, ApiError> {
    let repo = ctx.card_repo();
    let uc = ListCards {
        repo: repo.as_ref(),
    };
    let cards = uc.execute().await?;
    Ok(Json(cards.into_iter().map(CardBody::from).collect()))
}

#[utoipa::path(post, path = "/cards", tag = "Cards", request_body = CreateCardRequest,
    responses((status = 201, body = CardBody)))]
pub async fn create_card(
    State(ctx): State<AppContext>,
    Identity(user_id): Identity,
    Json(req): Json<CreateCardRequest>,
) -> Result<(StatusCode, Json<CardBody>), ApiError> {
    validation::validate_card(req.name.as_deref(), req.link.as_deref()).map_err(|_| {
        ApiError::BadRequest("Переданы некорректные данные при создании карточки".into())
    })?;
    let (name, link) = (req.name.unwrap_or_default(), req.link.unwrap_or_default());
    let repo = ctx.card_repo();
    let uc = CreateCard {
        repo: repo.as_ref(),
    };
    let card = uc.execute(&name, &link, user_id).await?;
    Ok((StatusCode::CREATED, Json(card.into())))
}

#[utoipa::path(delete, path = "/cards/{cardId}", tag = "Cards",
    params(("cardId" = String, Path, description = "Card id")),
    responses((status = 200, body = DeleteCardResponse)))]
pub async fn delete_card(
    State(ctx): State<AppContext>,
    Identity(user_id): Identity,
    Path(card_id): Path<String>,
) -> Result<Json<DeleteCardResponse>, ApiError> {
    let card_id = Uuid::parse_str(&card_id)
        .map_err(|_| ApiError::BadRequest("Передан некорректный _id карточки".into()))?;
    let repo = ctx.card_repo();
    let uc = DeleteCard {
        repo: repo.as_ref(),
    };
    uc.execute(card_id, user_id).await.map_err(|e| match e {
        DeleteCardError::NotFound => ApiError::NotFound(CARD_NOT_FOUND.into()),
        DeleteCardError::NotOwner => {
            ApiError::Forbidden("Недостаточно прав для удаления карточки".into())
        }
        DeleteCardError::Storage(err) => ApiError::Internal(err),
    })?;
    Ok(Json(DeleteCardResponse {
        message: "Карточка удалена".into(),
    }))
}

#[utoipa::path(put, path = "/cards/{cardId}/likes", tag = "Cards",
    params(("cardId" = String, Path, description = "Card id")),
    responses((status = 200, body = CardBody)))]
pub async fn like_card(
    State(ctx): State<AppContext>,
    Identity(user_id): Identity,
    Path(card_id): Path<String>,
) -> Result<Json<CardBody>, ApiError> {
    let card_id = Uuid::parse_str(&card_id).map_err(|_| {
        ApiError::BadRequest("Переданы некорректные данные для постановки лайка".into())
    })?;
    let repo = ctx.card_repo();
    let uc = LikeCard {
        repo: repo.as_ref(),
    };
    let card = uc
        .execute(card_id, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(CARD_NOT_FOUND.into()))?;
    Ok(Json(card.into()))
}

#[utoipa::path(delete, path = "/cards/{cardId}/likes", tag = "Cards",
    params(("cardId" = String, Path, description = "Card id")),
    responses((status = 200, body = CardBody)))]
pub async fn dislike_card(
    State(ctx): State<AppContext>,
    Identity(user_id): Identity,
    Path(card_id): Path<String>,
) -> Result<Json<CardBody>, ApiError> {
    let card_id = Uuid::parse_str(&card_id).map_err(|_| {
        ApiError::BadRequest("Переданы некорректные данные для снятия лайка".into())
    })?;
    let repo = ctx.card_repo();
    let uc = DislikeCard {
        repo: repo.as_ref(),
    };
    let card = uc
        .execute(card_id, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(CARD_NOT_FOUND.into()))?;
    Ok(Json(card.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::ports::card_repository::CardRepository;
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
    async fn malformed_card_id_gets_the_message_for_each_operation() {
        let ctx = test_ctx();
        let me = Identity(Uuid::new_v4());
        let bad_id = || Path::<String>("definitely-not-a-card-id".into());

        let err = delete_card(State(ctx.clone()), Identity(me.0), bad_id())
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Передан некорректный _id карточки");

        let err = like_card(State(ctx.clone()), Identity(me.0), bad_id())
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "Переданы некорректные данные для постановки лайка"
        );

        let err = dislike_card(State(ctx), Identity(me.0), bad_id())
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "Переданы некорректные данные для снятия лайка"
        );
    }

    #[tokio::test]
    async fn well_formed_but_absent_card_id_is_not_found() {
        let ctx = test_ctx();
        let absent = || Path(Uuid::new_v4().to_string());

        let err = like_card(State(ctx.clone()), Identity(Uuid::new_v4()), absent())
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), CARD_NOT_FOUND);

        let err = delete_card(State(ctx), Identity(Uuid::new_v4()), absent())
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_owner_delete_maps_to_forbidden() {
        let ctx = test_ctx();
        let owner = Uuid::new_v4();
        let card = ctx
            .card_repo()
            .create("Ridge", "https://example.com/a.jpg", owner)
            .await
            .unwrap();

        let err = delete_card(
            State(ctx),
            Identity(Uuid::new_v4()),
            Path(card.id.to_string()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
        assert_eq!(err.to_string(), "Недостаточно прав для удаления карточки");
    }
}
