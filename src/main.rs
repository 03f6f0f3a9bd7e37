use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::{get, post},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{IntoParams, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    ActivationReq, ActivationRes, ActiveRegionDto, BodyMapReq, BodyMapRes, BodyMapService,
    CatalogRegionDto, CatalogRes, HealthRes, HealthService, PanelDto, RecordDto, RenderStyleDto,
    RenderedRegionDto, TwinHeaderDto,
};
use bodymap_core::config::biometric_defaults_from_env_values;
use bodymap_core::constants::DEFAULT_SNIPPET_MAX_CHARS;
use bodymap_core::{BodyMap, CoreConfig};

/// Application state shared across REST API handlers
#[derive(Clone)]
struct AppState {
    body_map_service: BodyMapService,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
struct CatalogQuery {
    /// "Female" (any case) selects the female catalog; anything else is Male.
    gender: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, catalog, activation, body_map),
    components(schemas(
        HealthRes,
        CatalogRes,
        CatalogRegionDto,
        RecordDto,
        ActivationReq,
        ActivationRes,
        ActiveRegionDto,
        BodyMapReq,
        BodyMapRes,
        RenderedRegionDto,
        RenderStyleDto,
        PanelDto,
        TwinHeaderDto
    ))
)]
struct ApiDoc;

/// Main entry point for the body map REST server
///
/// # Environment Variables
/// - `BODYMAP_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `BODYMAP_DEFAULT_WEIGHT_KG`, `BODYMAP_DEFAULT_HEIGHT_CM`, `BODYMAP_DEFAULT_HEART_RATE_BPM`:
///   biometrics used when a request omits them
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(log_filter()?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Resolve configuration once at startup.
    let defaults = biometric_defaults_from_env_values(
        std::env::var("BODYMAP_DEFAULT_WEIGHT_KG").ok(),
        std::env::var("BODYMAP_DEFAULT_HEIGHT_CM").ok(),
        std::env::var("BODYMAP_DEFAULT_HEART_RATE_BPM").ok(),
    )?;
    let config = Arc::new(CoreConfig::new(defaults, DEFAULT_SNIPPET_MAX_CHARS)?);
    let rest_addr = std::env::var("BODYMAP_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("++ Starting body map REST on {}", rest_addr);

    let state = AppState {
        body_map_service: BodyMapService::new(Arc::new(BodyMap::new(config))),
    };

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}

/// `RUST_LOG` plus info-level output from the engine and the request services.
fn log_filter() -> anyhow::Result<EnvFilter> {
    Ok(EnvFilter::from_default_env()
        .add_directive("bodymap=info".parse()?)
        .add_directive("api_shared=info".parse()?))
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/catalog", get(catalog))
        .route("/activation", post(activation))
        .route("/body-map", post(body_map))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/catalog",
    params(CatalogQuery),
    responses(
        (
            status = 200,
            description = "Regions of the resolved catalog in catalog order",
            body = CatalogRes
        )
    )
)]
/// Returns the region catalog for a gender
async fn catalog(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<CatalogRes> {
    Json(state.body_map_service.catalog(query.gender.as_deref()))
}

#[utoipa::path(
    post,
    path = "/activation",
    request_body = ActivationReq,
    responses(
        (status = 200, description = "Active regions with their snippets", body = ActivationRes),
        (status = 400, description = "Malformed request body")
    )
)]
/// Matches medical records against the catalog
async fn activation(
    State(state): State<AppState>,
    Json(req): Json<ActivationReq>,
) -> Json<ActivationRes> {
    Json(state.body_map_service.activation(req))
}

#[utoipa::path(
    post,
    path = "/body-map",
    request_body = BodyMapReq,
    responses(
        (
            status = 200,
            description = "Render frame for the given inputs and pointer state",
            body = BodyMapRes
        ),
        (status = 400, description = "Malformed request body")
    )
)]
/// Renders one frame of the body map
///
/// Hover and selection are replayed onto a fresh session, so unknown ids are reported in
/// `ignored_region_ids` rather than rejected.
async fn body_map(
    State(state): State<AppState>,
    Json(req): Json<BodyMapReq>,
) -> Json<BodyMapRes> {
    Json(state.body_map_service.render(req))
}
