use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use mesto_api::bootstrap::app_context::AppContext;
use mesto_api::bootstrap::config::Config;
use mesto_api::infrastructure::db::repositories::card_repository_sqlx::SqlxCardRepository;
use mesto_api::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository;
use mesto_api::presentation::http as handlers;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        mesto_api::presentation::http::auth::signup,
        mesto_api::presentation::http::auth::signin,
        mesto_api::presentation::http::users::list_users,
        mesto_api::presentation::http::users::get_current_user,
        mesto_api::presentation::http::users::get_user_by_id,
        mesto_api::presentation::http::users::update_profile,
        mesto_api::presentation::http::users::update_avatar,
        mesto_api::presentation::http::cards::list_cards,
        mesto_api::presentation::http::cards::create_card,
        mesto_api::presentation::http::cards::delete_card,
        mesto_api::presentation::http::cards::like_card,
        mesto_api::presentation::http::cards::dislike_card,
        mesto_api::presentation::http::health::health,
    ),
    components(schemas(
        mesto_api::presentation::http::auth::SignupRequest,
        mesto_api::presentation::http::auth::SigninRequest,
        mesto_api::presentation::http::auth::SigninResponse,
        mesto_api::presentation::http::users::UserBody,
        mesto_api::presentation::http::users::UpdateProfileRequest,
        mesto_api::presentation::http::users::UpdateAvatarRequest,
        mesto_api::presentation::http::cards::CardBody,
        mesto_api::presentation::http::cards::CreateCardRequest,
        mesto_api::presentation::http::cards::DeleteCardResponse,
        mesto_api::presentation::http::error::ErrorBody,
        mesto_api::presentation::http::health::HealthResp,
    )),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Users", description = "Profiles"),
        (name = "Cards", description = "Shared cards and likes"),
        (name = "Health", description = "System health checks")
    )
)]
struct ApiDoc;

fn build_cors(cfg: &Config) -> CorsLayer {
    let methods = [
        http::Method::GET,
        http::Method::POST,
        http::Method::PUT,
        http::Method::DELETE,
        http::Method::PATCH,
        http::Method::OPTIONS,
    ];
    let headers = [http::header::CONTENT_TYPE, http::header::AUTHORIZATION];
    let origin = cfg
        .frontend_url
        .as_deref()
        .and_then(|o| HeaderValue::from_str(o).ok())
        .map(AllowOrigin::exact)
        .unwrap_or_else(AllowOrigin::mirror_request);
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(true)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "mesto_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting Mesto backend");

    let pool = mesto_api::infrastructure::db::connect_pool(&cfg.database_url).await?;
    mesto_api::infrastructure::db::migrate(&pool).await?;

    let user_repo = Arc::new(SqlxUserRepository::new(pool.clone()));
    let card_repo = Arc::new(SqlxCardRepository::new(pool.clone()));
    let ctx = AppContext::new(cfg.clone(), user_repo, card_repo);

    let app = Router::new()
        .merge(handlers::auth::routes(ctx.clone()))
        .nest("/users", handlers::users::routes(ctx.clone()))
        .nest("/cards", handlers::cards::routes(ctx.clone()))
        .merge(handlers::health::routes(pool.clone()))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .fallback(handlers::not_found)
        .layer(build_cors(&cfg))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    info!(%addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
