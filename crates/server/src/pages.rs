//! Public page handlers.
//!
//! Each handler checks the page cache first, renders from the
//! restricted database client on a miss, and stores the result. A
//! failed section fetch degrades to an empty section instead of
//! failing the whole page; only a render failure returns 500.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use tracing::{debug, error};

use service::{
    case_study_service, service_item_service, team_member_service, testimonial_service,
    working_process_service,
};

use crate::render;
use crate::state::ServerState;

pub async fn home(State(state): State<ServerState>) -> Result<Html<String>, StatusCode> {
    if let Some(cached) = state.cache.get("/").await {
        debug!(route = "/", "page cache hit");
        return Ok(Html(cached.to_string()));
    }

    let db = &state.clients.public;
    let services = service_item_service::list_active_services(db)
        .await
        .unwrap_or_else(|e| {
            error!(err = %e, section = "services", "fetch failed; rendering empty section");
            Vec::new()
        });
    let working_processes = working_process_service::list_active_working_processes(db)
        .await
        .unwrap_or_else(|e| {
            error!(err = %e, section = "working_processes", "fetch failed; rendering empty section");
            Vec::new()
        });
    let team_members = team_member_service::list_active_team_members(db)
        .await
        .unwrap_or_else(|e| {
            error!(err = %e, section = "team_members", "fetch failed; rendering empty section");
            Vec::new()
        });
    let testimonials = testimonial_service::list_active_testimonials(db)
        .await
        .unwrap_or_else(|e| {
            error!(err = %e, section = "testimonials", "fetch failed; rendering empty section");
            Vec::new()
        });
    let case_studies = case_study_service::list_active_case_studies(db)
        .await
        .unwrap_or_else(|e| {
            error!(err = %e, section = "case_studies", "fetch failed; rendering empty section");
            Vec::new()
        });

    let html = render::render_home(
        &state.hb,
        &services,
        &working_processes,
        &team_members,
        &testimonials,
        &case_studies,
    )
    .map_err(|e| {
        error!(err = %e, route = "/", "page render failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    state.cache.insert("/", html.clone()).await;
    Ok(Html(html))
}

pub async fn case_studies(State(state): State<ServerState>) -> Result<Html<String>, StatusCode> {
    if let Some(cached) = state.cache.get("/case-studies").await {
        debug!(route = "/case-studies", "page cache hit");
        return Ok(Html(cached.to_string()));
    }

    let rows = case_study_service::list_active_case_studies(&state.clients.public)
        .await
        .unwrap_or_else(|e| {
            error!(err = %e, section = "case_studies", "fetch failed; rendering empty section");
            Vec::new()
        });

    let html = render::render_case_studies(&state.hb, &rows).map_err(|e| {
        error!(err = %e, route = "/case-studies", "page render failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    state.cache.insert("/case-studies", html.clone()).await;
    Ok(Html(html))
}
