use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::modules::content::application::content_repository::SETTINGS_KEY;
use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    storage: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Reads one key from the content store
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    match data.store.get(SETTINGS_KEY) {
        Ok(_) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            storage: "ok",
        }),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                storage: "unhealthy",
            })
        }
    }
}
