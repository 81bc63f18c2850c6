use anyhow::Context;
use axum::{extract::DefaultBodyLimit, middleware, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod auth;
mod config;
mod models;
mod routes;

use adapters::{
    GeminiBackend, PgAnalysisRepository, PgAuditLog, PgOrganizationRepository,
    PgRateLimitRepository,
};
use application::{
    AdmissionGate, AnalysisPipeline, AnalysisService, ModelInvoker, OrganizationService,
};
use callsight::{AudioNormalizer, DecodingParams, IndustryCatalog};
use config::AnalysisSettings;

/// Type aliases for application services with concrete adapter implementations
pub type AppAnalysisService = AnalysisService<
    PgOrganizationRepository,
    PgRateLimitRepository,
    PgAnalysisRepository,
    GeminiBackend,
    PgAuditLog,
>;
pub type AppOrganizationService = OrganizationService<PgOrganizationRepository>;

/// Multipart framing allowance on top of the audio size limit
const UPLOAD_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AppAnalysisService>,
    pub organization_service: Arc<AppOrganizationService>,
    pub catalog: Arc<IndustryCatalog>,
    pub settings: Arc<AnalysisSettings>,
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
        message: "Callsight API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("📞 Callsight API initializing...");

    // Initialize API key from secrets
    if let Some(api_key) = secrets.get("CALLSIGHT_API_KEY") {
        auth::init_api_key(api_key);
        tracing::info!("🔐 API key authentication enabled");
    } else {
        tracing::warn!("⚠️  No CALLSIGHT_API_KEY set - authentication disabled");
    }

    let gemini_api_key = secrets
        .get("GEMINI_API_KEY")
        .context("GEMINI_API_KEY is required for call analysis")?;

    let settings = Arc::new(AnalysisSettings::from_lookup(|key| secrets.get(key))?);
    tracing::info!(
        "⚙️  Models: {} | audio limit {} bytes | {} requests per {}s | timeout {}s",
        settings.model_candidates.as_slice().join(" -> "),
        settings.max_audio_bytes,
        settings.rate_limit.max_requests,
        settings.rate_limit.window.num_seconds(),
        settings.invocation_timeout.as_secs()
    );

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("✅ Database migrations completed");

    // Initialize adapters
    let organization_repo = Arc::new(PgOrganizationRepository::new(pool.clone()));
    let rate_limit_repo = Arc::new(PgRateLimitRepository::new(pool.clone()));
    let analysis_repo = Arc::new(PgAnalysisRepository::new(pool.clone()));
    let audit_log = Arc::new(PgAuditLog::new(pool));
    let backend = Arc::new(GeminiBackend::new(
        gemini_api_key,
        settings.gemini_base_url.clone(),
    ));
    let catalog = Arc::new(IndustryCatalog::builtin());

    tracing::info!("📚 Industry catalog loaded ({} templates)", catalog.len());

    // Initialize application services
    let analysis_service = Arc::new(AnalysisService::new(AnalysisPipeline {
        organizations: organization_repo.clone(),
        gate: AdmissionGate::new(rate_limit_repo, settings.rate_limit),
        analyses: analysis_repo,
        invoker: ModelInvoker::new(
            backend,
            settings.model_candidates.clone(),
            DecodingParams::greedy(settings.max_output_tokens),
        ),
        audit: audit_log,
        catalog: catalog.clone(),
        audio: AudioNormalizer::new(settings.max_audio_bytes),
        default_strictness: settings.default_strictness,
        timeout: settings.invocation_timeout,
    }));
    let organization_service = Arc::new(OrganizationService::new(
        organization_repo,
        catalog.clone(),
        settings.default_strictness,
    ));

    // Create application state
    let state = AppState {
        analysis_service,
        organization_service,
        catalog,
        settings: settings.clone(),
    };

    // Protected routes (require authentication)
    let protected_routes = Router::new()
        .merge(
            routes::analysis::router().layer(DefaultBodyLimit::max(
                settings.max_audio_bytes + UPLOAD_OVERHEAD_BYTES,
            )),
        )
        .merge(routes::organization::router())
        .merge(routes::prompt::router())
        .merge(routes::industry::router())
        .layer(middleware::from_fn(auth::auth_middleware));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Callsight API ready");

    Ok(router.into())
}
