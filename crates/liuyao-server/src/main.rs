use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod auth;
mod models;
mod routes;

use liuyao::{ChineseCalendar, DivinationService};

/// Application service with the concrete calendar converter
pub type AppDivinationService = DivinationService<ChineseCalendar>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub divination_service: Arc<AppDivinationService>,
}

impl AppState {
    pub fn new() -> Self {
        let calendar = Arc::new(ChineseCalendar::new());
        Self {
            divination_service: Arc::new(DivinationService::new(calendar)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Liu Yao API is running - the six lines await".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the router with documentation, health check and protected routes
pub fn app(state: AppState) -> Router {
    // Protected routes (require authentication)
    let protected_routes = Router::new()
        .merge(routes::divination::router())
        .layer(middleware::from_fn(auth::auth_middleware));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("☯️ Liu Yao API initializing...");

    // Initialize API key from secrets
    if let Some(api_key) = secrets.get("LIUYAO_API_KEY") {
        auth::init_api_key(api_key);
        tracing::info!("🔐 API key authentication enabled");
    } else {
        tracing::warn!("⚠️  No LIUYAO_API_KEY set - authentication disabled");
    }

    let router = app(AppState::new());

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Liu Yao API ready");

    Ok(router.into())
}
