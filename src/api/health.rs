use actix_web::{HttpResponse, Responder, get, web};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::api::ApiSettings;
use crate::api::application::service::REDACTED_DETAIL;
use crate::db::ApplicationStore;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn failure_detail(settings: &ApiSettings, err: &sqlx::Error) -> String {
    if settings.expose_database_errors {
        err.to_string()
    } else {
        REDACTED_DETAIL.to_string()
    }
}

/// Health check endpoint
///
/// General health check including database connectivity.
/// Use for load balancers and uptime monitors.
#[get("/health")]
async fn health_check(
    store: web::Data<dyn ApplicationStore>,
    settings: web::Data<ApiSettings>,
) -> impl Responder {
    match store.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse {
            status: "healthy".to_string(),
            database: "connected".to_string(),
            error: None,
        }),
        Err(e) => {
            error!("Health check failed: {:?}", e);
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: "unhealthy".to_string(),
                database: "disconnected".to_string(),
                error: Some(format!("Database error: {}", failure_detail(&settings, &e))),
            })
        }
    }
}

/// Readiness check endpoint
///
/// Returns 503 while the database is unreachable so the instance is taken
/// out of rotation until it recovers.
#[get("/ready")]
async fn readiness_check(
    store: web::Data<dyn ApplicationStore>,
    settings: web::Data<ApiSettings>,
) -> impl Responder {
    match store.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse {
            status: "ready".to_string(),
            database: "connected".to_string(),
            error: None,
        }),
        Err(e) => {
            error!("Readiness check failed: database unavailable: {:?}", e);
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: "not_ready".to_string(),
                database: "disconnected".to_string(),
                error: Some(format!("Database unavailable: {}", failure_detail(&settings, &e))),
            })
        }
    }
}

/// Liveness check endpoint. Does not check dependencies.
#[get("/live")]
async fn liveness_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "alive".to_string(),
        database: "not_checked".to_string(),
        error: None,
    })
}

pub fn health_config(config: &mut web::ServiceConfig) {
    config
        .service(health_check)
        .service(readiness_check)
        .service(liveness_check);
}
