use axum::{extract::{Path, State}, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use service::invalidation::{ContentEvent, ContentKind};
use service::team_member_service;
use tracing::{error, info};
use uuid::Uuid;

use crate::{errors::JsonApiError, state::ServerState};

fn default_active() -> bool { true }

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct TeamMemberInput {
    pub name: String,
    #[serde(default)]
    pub role_title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[utoipa::path(
    get, path = "/admin/team-members", tag = "team-members",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::team_member::Model>>, JsonApiError> {
    let rows = team_member_service::list_team_members(&state.clients.admin).await?;
    info!(count = rows.len(), "list team members");
    Ok(Json(rows))
}

#[utoipa::path(
    post, path = "/admin/team-members", tag = "team-members",
    request_body = TeamMemberInput,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<TeamMemberInput>) -> Result<Json<models::team_member::Model>, JsonApiError> {
    let m = team_member_service::create_team_member(
        &state.clients.admin,
        &input.name,
        input.role_title.as_deref(),
        input.bio.as_deref(),
        input.photo_url.as_deref(),
        input.sort_order,
        input.is_active,
    )
    .await?;
    info!(id = %m.id, name = %m.name, "created team member");
    state.invalidator.publish(ContentEvent { kind: ContentKind::TeamMembers }).await;
    Ok(Json(m))
}

#[utoipa::path(
    get, path = "/admin/team-members/{id}", tag = "team-members",
    params(("id" = Uuid, Path, description = "Team member ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<models::team_member::Model>, StatusCode> {
    match team_member_service::get_team_member(&state.clients.admin, id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

#[utoipa::path(
    put, path = "/admin/team-members/{id}", tag = "team-members",
    params(("id" = Uuid, Path, description = "Team member ID")),
    request_body = TeamMemberInput,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(State(state): State<ServerState>, Path(id): Path<Uuid>, Json(input): Json<TeamMemberInput>) -> Result<StatusCode, JsonApiError> {
    team_member_service::update_team_member(
        &state.clients.admin,
        id,
        &input.name,
        input.role_title.as_deref(),
        input.bio.as_deref(),
        input.photo_url.as_deref(),
        input.sort_order,
        input.is_active,
    )
    .await?;
    info!(id = %id, "updated team member");
    state.invalidator.publish(ContentEvent { kind: ContentKind::TeamMembers }).await;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/admin/team-members/{id}", tag = "team-members",
    params(("id" = Uuid, Path, description = "Team member ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<Uuid>) -> StatusCode {
    match team_member_service::delete_team_member(&state.clients.admin, id).await {
        Ok(true) => {
            info!(id = %id, "deleted team member");
            state.invalidator.publish(ContentEvent { kind: ContentKind::TeamMembers }).await;
            StatusCode::NO_CONTENT
        }
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => { error!(err = %e, "delete team member failed"); StatusCode::INTERNAL_SERVER_ERROR }
    }
}
