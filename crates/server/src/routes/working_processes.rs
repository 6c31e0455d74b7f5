use axum::{extract::{Path, State}, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use service::invalidation::{ContentEvent, ContentKind};
use service::working_process_service;
use tracing::{error, info};
use uuid::Uuid;

use crate::{errors::JsonApiError, state::ServerState};

fn default_active() -> bool { true }

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct WorkingProcessInput {
    pub step_no: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[utoipa::path(
    get, path = "/admin/working-processes", tag = "working-processes",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::working_process::Model>>, JsonApiError> {
    let rows = working_process_service::list_working_processes(&state.clients.admin).await?;
    info!(count = rows.len(), "list working processes");
    Ok(Json(rows))
}

#[utoipa::path(
    post, path = "/admin/working-processes", tag = "working-processes",
    request_body = WorkingProcessInput,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<WorkingProcessInput>) -> Result<Json<models::working_process::Model>, JsonApiError> {
    let m = working_process_service::create_working_process(
        &state.clients.admin,
        input.step_no,
        &input.title,
        input.description.as_deref(),
        input.sort_order,
        input.is_active,
    )
    .await?;
    info!(id = %m.id, step_no = m.step_no, "created working process");
    state.invalidator.publish(ContentEvent { kind: ContentKind::WorkingProcesses }).await;
    Ok(Json(m))
}

#[utoipa::path(
    get, path = "/admin/working-processes/{id}", tag = "working-processes",
    params(("id" = Uuid, Path, description = "Working process ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<models::working_process::Model>, StatusCode> {
    match working_process_service::get_working_process(&state.clients.admin, id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

#[utoipa::path(
    put, path = "/admin/working-processes/{id}", tag = "working-processes",
    params(("id" = Uuid, Path, description = "Working process ID")),
    request_body = WorkingProcessInput,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(State(state): State<ServerState>, Path(id): Path<Uuid>, Json(input): Json<WorkingProcessInput>) -> Result<StatusCode, JsonApiError> {
    working_process_service::update_working_process(
        &state.clients.admin,
        id,
        input.step_no,
        &input.title,
        input.description.as_deref(),
        input.sort_order,
        input.is_active,
    )
    .await?;
    info!(id = %id, "updated working process");
    state.invalidator.publish(ContentEvent { kind: ContentKind::WorkingProcesses }).await;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/admin/working-processes/{id}", tag = "working-processes",
    params(("id" = Uuid, Path, description = "Working process ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<Uuid>) -> StatusCode {
    match working_process_service::delete_working_process(&state.clients.admin, id).await {
        Ok(true) => {
            info!(id = %id, "deleted working process");
            state.invalidator.publish(ContentEvent { kind: ContentKind::WorkingProcesses }).await;
            StatusCode::NO_CONTENT
        }
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => { error!(err = %e, "delete working process failed"); StatusCode::INTERNAL_SERVER_ERROR }
    }
}
