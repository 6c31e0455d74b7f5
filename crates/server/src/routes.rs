use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::pages;
use crate::state::ServerState;

pub mod case_studies;
pub mod services;
pub mod team_members;
pub mod testimonials;
pub mod working_processes;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "OK"))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public pages, health, admin API,
/// swagger docs, and the static admin UI.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let admin_assets = ServeDir::new("admin-ui").fallback(ServeFile::new("admin-ui/index.html"));

    let public = Router::new()
        .route("/", get(pages::home))
        .route("/case-studies", get(pages::case_studies))
        .route("/health", get(health))
        .nest_service("/admin-ui", admin_assets);

    let admin = Router::new()
        .route("/admin/services", get(services::list).post(services::create))
        .route(
            "/admin/services/:id",
            get(services::get).put(services::update).delete(services::delete),
        )
        .route(
            "/admin/working-processes",
            get(working_processes::list).post(working_processes::create),
        )
        .route(
            "/admin/working-processes/:id",
            get(working_processes::get)
                .put(working_processes::update)
                .delete(working_processes::delete),
        )
        .route(
            "/admin/team-members",
            get(team_members::list).post(team_members::create),
        )
        .route(
            "/admin/team-members/:id",
            get(team_members::get).put(team_members::update).delete(team_members::delete),
        )
        .route(
            "/admin/testimonials",
            get(testimonials::list).post(testimonials::create),
        )
        .route(
            "/admin/testimonials/:id",
            get(testimonials::get).put(testimonials::update).delete(testimonials::delete),
        )
        .route(
            "/admin/case-studies",
            get(case_studies::list).post(case_studies::create),
        )
        .route(
            "/admin/case-studies/:id",
            get(case_studies::get).put(case_studies::update).delete(case_studies::delete),
        );

    public
        .merge(admin)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
