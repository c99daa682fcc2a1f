use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use mongodb::bson::oid::ObjectId;

use crate::{
    application::dto::{CreatePartRequest, HealthResponse, PartResponse},
    domain::errors::DomainError,
    interface::http::problem::{ApiProblem, ApiResult},
    state::AppState,
};

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn list_parts(State(state): State<AppState>) -> ApiResult<Json<Vec<PartResponse>>> {
    let parts = state
        .part_service
        .list_parts()
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(parts))
}

pub async fn get_part(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PartResponse>> {
    // Reject malformed ids before touching the repository, so a bad id is
    // a 400 and only a well-formed unknown id becomes a 404.
    parse_object_id(&id)?;

    let maybe_part = state
        .part_service
        .get_part(&id)
        .await
        .map_err(ApiProblem::from_domain)?;

    let Some(part) = maybe_part else {
        return Err(ApiProblem::from_domain(DomainError::not_found(format!(
            "part with id {id} not found"
        ))));
    };

    Ok(Json(part))
}

pub async fn create_part(
    State(state): State<AppState>,
    Json(request): Json<CreatePartRequest>,
) -> ApiResult<(StatusCode, Json<PartResponse>)> {
    let created = state
        .part_service
        .create_part(request)
        .await
        .map_err(ApiProblem::from_domain)?;

    Ok((StatusCode::CREATED, Json(created)))
}

fn parse_object_id(raw: &str) -> ApiResult<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| {
        ApiProblem::from_domain(DomainError::validation(format!(
            "'{raw}' is not a valid part id"
        )))
    })
}
