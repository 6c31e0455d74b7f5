use axum::{extract::{Path, State}, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use service::invalidation::{ContentEvent, ContentKind};
use service::service_item_service;
use tracing::{error, info};
use uuid::Uuid;

use crate::{errors::JsonApiError, state::ServerState};

fn default_active() -> bool { true }

/// Full payload for create and replace; `PUT` overwrites every field.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct ServiceInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[utoipa::path(
    get, path = "/admin/services", tag = "services",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::service_item::Model>>, JsonApiError> {
    let rows = service_item_service::list_services(&state.clients.admin).await?;
    info!(count = rows.len(), "list services");
    Ok(Json(rows))
}

#[utoipa::path(
    post, path = "/admin/services", tag = "services",
    request_body = ServiceInput,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<ServiceInput>) -> Result<Json<models::service_item::Model>, JsonApiError> {
    let m = service_item_service::create_service(
        &state.clients.admin,
        &input.title,
        input.description.as_deref(),
        input.icon.as_deref(),
        input.sort_order,
        input.is_active,
    )
    .await?;
    info!(id = %m.id, title = %m.title, "created service");
    state.invalidator.publish(ContentEvent { kind: ContentKind::Services }).await;
    Ok(Json(m))
}

#[utoipa::path(
    get, path = "/admin/services/{id}", tag = "services",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<models::service_item::Model>, StatusCode> {
    match service_item_service::get_service(&state.clients.admin, id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

#[utoipa::path(
    put, path = "/admin/services/{id}", tag = "services",
    params(("id" = Uuid, Path, description = "Service ID")),
    request_body = ServiceInput,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(State(state): State<ServerState>, Path(id): Path<Uuid>, Json(input): Json<ServiceInput>) -> Result<StatusCode, JsonApiError> {
    service_item_service::update_service(
        &state.clients.admin,
        id,
        &input.title,
        input.description.as_deref(),
        input.icon.as_deref(),
        input.sort_order,
        input.is_active,
    )
    .await?;
    info!(id = %id, "updated service");
    state.invalidator.publish(ContentEvent { kind: ContentKind::Services }).await;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/admin/services/{id}", tag = "services",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<Uuid>) -> StatusCode {
    match service_item_service::delete_service(&state.clients.admin, id).await {
        Ok(true) => {
            info!(id = %id, "deleted service");
            state.invalidator.publish(ContentEvent { kind: ContentKind::Services }).await;
            StatusCode::NO_CONTENT
        }
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => { error!(err = %e, "delete service failed"); StatusCode::INTERNAL_SERVER_ERROR }
    }
}
