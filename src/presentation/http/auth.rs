use axum::{
    Json, Router,
    extract::{FromRequestParts, State},
    http::{HeaderMap, StatusCode, request::Parts},
    routing::post,
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::ports::user_repository::CreateUserError;
use crate::application::use_cases::auth::login::{Login, LoginRequest};
use crate::application::use_cases::auth::register::{Register, RegisterRequest};
use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::{Config, TOKEN_TTL_SECS};
use crate::presentation::http::error::ApiError;
use crate::presentation::http::users::UserBody;
use crate::presentation::http::validation;

pub const COOKIE_NAME: &str = "jwt";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub about: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SigninRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SigninResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/signup", tag = "Auth", request_body = SignupRequest, responses(
    (status = 201, body = UserBody)
))]
pub async fn signup(
    State(ctx): State<AppContext>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, HeaderMap, Json<UserBody>), ApiError> {
    validation::validate_registration(
        req.email.as_deref(),
        req.password.as_deref(),
        req.name.as_deref(),
        req.about.as_deref(),
        req.avatar.as_deref(),
    )
    .map_err(|errs| ApiError::BadRequest(format!("Ошибка валидации: {errs}")))?;

    let repo = ctx.user_repo();
    let uc = Register {
        repo: repo.as_ref(),
    };
    let dto = RegisterRequest {
        email: req.email.unwrap_or_default(),
        password: req.password.unwrap_or_default(),
        name: req.name,
        about: req.about,
        avatar: req.avatar,
    };
    let user = uc.execute(&dto).await.map_err(|e| match e {
        CreateUserError::DuplicateEmail => {
            ApiError::Conflict("Пользователь с таким email уже существует".into())
        }
        CreateUserError::Storage(err) => ApiError::Internal(err),
    })?;

    let token = issue_token(&ctx.cfg, user.id)?;
    let headers = session_cookie_headers(&token, ctx.cfg.is_production)?;
    Ok((StatusCode::CREATED, headers, Json(user.into())))
}

#[utoipa::path(post, path = "/signin", tag = "Auth", request_body = SigninRequest, responses(
    (status = 200, body = SigninResponse)
))]
pub async fn signin(
    State(ctx): State<AppContext>,
    Json(req): Json<SigninRequest>,
) -> Result<(HeaderMap, Json<SigninResponse>), ApiError> {
    let (email, password) = match (req.email, req.password) {
        (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => (e, p),
        _ => {
            return Err(ApiError::BadRequest(
                "Email и пароль обязательны для заполнения".into(),
            ));
        }
    };

    let repo = ctx.user_repo();
    let uc = Login {
        repo: repo.as_ref(),
    };
    // One message for both unknown email and wrong password.
    let user = uc
        .execute(&LoginRequest { email, password })
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Неправильные почта или пароль".into()))?;

    let token = issue_token(&ctx.cfg, user.id)?;
    let headers = session_cookie_headers(&token, ctx.cfg.is_production)?;
    Ok((
        headers,
        Json(SigninResponse {
            id: user.id,
            email: user.email,
            name: user.name,
        }),
    ))
}

// --- Identity extractor & JWT utils ---

/// The authenticated user id, resolved from the session token and passed to
/// handlers as an explicit value.
#[derive(Debug)]
pub struct Identity(pub Uuid);

#[axum::async_trait]
impl FromRequestParts<AppContext> for Identity {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &AppContext,
    ) -> Result<Self, Self::Rejection> {
        // Cookie takes precedence; bearer header is the fallback for clients
        // that cannot use cookies.
        let from_cookie = parts
            .headers
            .get(axum::http::header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|h| get_cookie(h, COOKIE_NAME));
        let from_header = || {
            parts
                .headers
                .get(axum::http::header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|a| a.strip_prefix("Bearer "))
                .map(str::to_string)
        };
        let token = from_cookie
            .or_else(from_header)
            .ok_or_else(|| ApiError::Unauthorized("Необходима авторизация".into()))?;
        let user_id = decode_token(&ctx.cfg, &token).ok_or_else(|| {
            ApiError::Unauthorized("Недействительный токен авторизации".into())
        })?;
        Ok(Identity(user_id))
    }
}

pub fn issue_token(cfg: &Config, user_id: Uuid) -> Result<String, ApiError> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        exp: (now + TOKEN_TTL_SECS) as usize,
    };
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(anyhow::Error::new(e)))
}

/// `None` covers every failure mode: bad format, wrong signature, expiry,
/// and a subject that is not a uuid.
pub fn decode_token(cfg: &Config, token: &str) -> Option<Uuid> {
    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .ok()?;
    Uuid::parse_str(&data.claims.sub).ok()
}

// --- Cookie helpers ---

fn get_cookie(cookie_header: &str, name: &str) -> Option<String> {
    for part in cookie_header.split(';') {
        let kv = part.trim();
        if let Some((k, v)) = kv.split_once('=') {
            if k.trim() == name {
                return Some(v.trim().to_string());
            }
        }
    }
    None
}

pub fn build_session_cookie(token: &str, secure: bool) -> String {
    let secure_attr = if secure { "; Secure" } else { "" };
    format!(
        "{COOKIE_NAME}={token}; HttpOnly{secure_attr}; Path=/; Max-Age={TOKEN_TTL_SECS}; SameSite=Strict"
    )
}

fn session_cookie_headers(token: &str, secure: bool) -> Result<HeaderMap, ApiError> {
    let cookie = build_session_cookie(token, secure);
    let value = axum::http::HeaderValue::from_str(&cookie)
        .map_err(|e| ApiError::Internal(anyhow::Error::new(e)))?;
    let mut headers = HeaderMap::new();
    headers.insert(axum::http::header::SET_COOKIE, value);
    Ok(headers)
}
