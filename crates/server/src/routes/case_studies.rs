use axum::{extract::{Path, State}, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use service::case_study_service;
use service::invalidation::{ContentEvent, ContentKind};
use tracing::{error, info};
use uuid::Uuid;

use crate::{errors::JsonApiError, state::ServerState};

fn default_active() -> bool { true }

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CaseStudyInput {
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[utoipa::path(
    get, path = "/admin/case-studies", tag = "case-studies",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::case_study::Model>>, JsonApiError> {
    let rows = case_study_service::list_case_studies(&state.clients.admin).await?;
    info!(count = rows.len(), "list case studies");
    Ok(Json(rows))
}

#[utoipa::path(
    post, path = "/admin/case-studies", tag = "case-studies",
    request_body = CaseStudyInput,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<CaseStudyInput>) -> Result<Json<models::case_study::Model>, JsonApiError> {
    let m = case_study_service::create_case_study(
        &state.clients.admin,
        &input.title,
        input.summary.as_deref(),
        input.client_name.as_deref(),
        input.sort_order,
        input.is_active,
    )
    .await?;
    info!(id = %m.id, title = %m.title, "created case study");
    state.invalidator.publish(ContentEvent { kind: ContentKind::CaseStudies }).await;
    Ok(Json(m))
}

#[utoipa::path(
    get, path = "/admin/case-studies/{id}", tag = "case-studies",
    params(("id" = Uuid, Path, description = "Case study ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<models::case_study::Model>, StatusCode> {
    match case_study_service::get_case_study(&state.clients.admin, id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

#[utoipa::path(
    put, path = "/admin/case-studies/{id}", tag = "case-studies",
    params(("id" = Uuid, Path, description = "Case study ID")),
    request_body = CaseStudyInput,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(State(state): State<ServerState>, Path(id): Path<Uuid>, Json(input): Json<CaseStudyInput>) -> Result<StatusCode, JsonApiError> {
    case_study_service::update_case_study(
        &state.clients.admin,
        id,
        &input.title,
        input.summary.as_deref(),
        input.client_name.as_deref(),
        input.sort_order,
        input.is_active,
    )
    .await?;
    info!(id = %id, "updated case study");
    state.invalidator.publish(ContentEvent { kind: ContentKind::CaseStudies }).await;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/admin/case-studies/{id}", tag = "case-studies",
    params(("id" = Uuid, Path, description = "Case study ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<Uuid>) -> StatusCode {
    match case_study_service::delete_case_study(&state.clients.admin, id).await {
        Ok(true) => {
            info!(id = %id, "deleted case study");
            state.invalidator.publish(ContentEvent { kind: ContentKind::CaseStudies }).await;
            StatusCode::NO_CONTENT
        }
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => { error!(err = %e, "delete case study failed"); StatusCode::INTERNAL_SERVER_ERROR }
    }
}
