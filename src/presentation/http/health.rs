use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;

const SERVICE_NAME: &str = "mesto-api";

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResp {
    pub service: &'static str,
    pub status: &'static str,
}

impl HealthResp {
    fn from_probe(db_ok: bool) -> Self {
        Self {
            service: SERVICE_NAME,
            status: if db_ok { "ok" } else { "degraded" },
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, body = HealthResp))
)]
pub async fn health(State(pool): State<PgPool>) -> Json<HealthResp> {
    let db_ok = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&pool)
        .await
        .is_ok();
    Json(HealthResp::from_probe(db_ok))
}

pub fn routes(pool: PgPool) -> Router {
    Router::new().route("/health", get(health)).with_state(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_service_name_and_probe_outcome() {
        let up = HealthResp::from_probe(true);
        assert_eq!(up.service, "mesto-api");
        assert_eq!(up.status, "ok");

        let down = HealthResp::from_probe(false);
        assert_eq!(down.status, "degraded");
    }
}
