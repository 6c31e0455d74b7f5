use axum::{extract::{Path, State}, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use service::invalidation::{ContentEvent, ContentKind};
use service::testimonial_service;
use tracing::{error, info};
use uuid::Uuid;

use crate::{errors::JsonApiError, state::ServerState};

fn default_active() -> bool { true }

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct TestimonialInput {
    pub author_name: String,
    #[serde(default)]
    pub company: Option<String>,
    pub quote: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[utoipa::path(
    get, path = "/admin/testimonials", tag = "testimonials",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::testimonial::Model>>, JsonApiError> {
    let rows = testimonial_service::list_testimonials(&state.clients.admin).await?;
    info!(count = rows.len(), "list testimonials");
    Ok(Json(rows))
}

#[utoipa::path(
    post, path = "/admin/testimonials", tag = "testimonials",
    request_body = TestimonialInput,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<TestimonialInput>) -> Result<Json<models::testimonial::Model>, JsonApiError> {
    let m = testimonial_service::create_testimonial(
        &state.clients.admin,
        &input.author_name,
        input.company.as_deref(),
        &input.quote,
        input.sort_order,
        input.is_active,
    )
    .await?;
    info!(id = %m.id, author = %m.author_name, "created testimonial");
    state.invalidator.publish(ContentEvent { kind: ContentKind::Testimonials }).await;
    Ok(Json(m))
}

#[utoipa::path(
    get, path = "/admin/testimonials/{id}", tag = "testimonials",
    params(("id" = Uuid, Path, description = "Testimonial ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<models::testimonial::Model>, StatusCode> {
    match testimonial_service::get_testimonial(&state.clients.admin, id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

#[utoipa::path(
    put, path = "/admin/testimonials/{id}", tag = "testimonials",
    params(("id" = Uuid, Path, description = "Testimonial ID")),
    request_body = TestimonialInput,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(State(state): State<ServerState>, Path(id): Path<Uuid>, Json(input): Json<TestimonialInput>) -> Result<StatusCode, JsonApiError> {
    testimonial_service::update_testimonial(
        &state.clients.admin,
        id,
        &input.author_name,
        input.company.as_deref(),
        &input.quote,
        input.sort_order,
        input.is_active,
    )
    .await?;
    info!(id = %id, "updated testimonial");
    state.invalidator.publish(ContentEvent { kind: ContentKind::Testimonials }).await;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/admin/testimonials/{id}", tag = "testimonials",
    params(("id" = Uuid, Path, description = "Testimonial ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<Uuid>) -> StatusCode {
    match testimonial_service::delete_testimonial(&state.clients.admin, id).await {
        Ok(true) => {
            info!(id = %id, "deleted testimonial");
            state.invalidator.publish(ContentEvent { kind: ContentKind::Testimonials }).await;
            StatusCode::NO_CONTENT
        }
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => { error!(err = %e, "delete testimonial failed"); StatusCode::INTERNAL_SERVER_ERROR }
    }
}
