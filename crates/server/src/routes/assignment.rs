use crate::{
    dtos::{
        MessageResponse,
        assignment::{AssignmentRequest, AssignmentResponse},
    },
    error::{ApiError, ApiResult},
    extract::{ApiJson, ApiPath},
    state::AppState,
};
use axum::{Json, extract::State};
use database::{entities::assignments, services::assignment::AssignmentService};

fn to_responses(assignments: Vec<assignments::Model>) -> Json<Vec<AssignmentResponse>> {
    Json(assignments.into_iter().map(AssignmentResponse::from).collect())
}

#[utoipa::path(
    get,
    path = "/api/assignments",
    responses(
        (status = 200, description = "Every assignment", body = Vec<AssignmentResponse>)
    ),
    tag = "Assignments"
)]
pub async fn get_assignments(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<AssignmentResponse>>> {
    Ok(to_responses(
        AssignmentService::get_all_assignments(&state.db).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/assignments/{id}",
    params(
        ("id" = i32, Path, description = "Assignment ID")
    ),
    responses(
        (status = 200, description = "Assignment found", body = AssignmentResponse),
        (status = 404, description = "Assignment not found", body = MessageResponse)
    ),
    tag = "Assignments"
)]
pub async fn get_assignment_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<AssignmentResponse>> {
    AssignmentService::get_assignment_by_id(&state.db, id)
        .await?
        .map(|assignment| Json(assignment.into()))
        .ok_or_else(|| ApiError::NotFound("Assignment not found".to_string()))
}

#[utoipa::path(
    get,
    path = "/api/assignments/course/{course_id}",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Assignments of the course", body = Vec<AssignmentResponse>)
    ),
    tag = "Assignments"
)]
pub async fn get_assignments_by_course(
    State(state): State<AppState>,
    ApiPath(course_id): ApiPath<i32>,
) -> ApiResult<Json<Vec<AssignmentResponse>>> {
    Ok(to_responses(
        AssignmentService::get_assignments_by_course(&state.db, course_id).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/assignments",
    request_body = AssignmentRequest,
    responses(
        (status = 200, description = "Assignment created", body = AssignmentResponse),
        (status = 400, description = "Missing field or unknown course", body = MessageResponse)
    ),
    tag = "Assignments"
)]
pub async fn create_assignment(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AssignmentRequest>,
) -> ApiResult<Json<AssignmentResponse>> {
    let assignment = AssignmentService::create_assignment(&state.db, request.into()).await?;

    Ok(Json(assignment.into()))
}

#[utoipa::path(
    put,
    path = "/api/assignments/{id}",
    params(
        ("id" = i32, Path, description = "Assignment ID")
    ),
    request_body = AssignmentRequest,
    responses(
        (status = 200, description = "Assignment replaced", body = AssignmentResponse),
        (status = 400, description = "Missing field or unknown course", body = MessageResponse),
        (status = 404, description = "Assignment not found", body = MessageResponse)
    ),
    tag = "Assignments"
)]
pub async fn update_assignment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<AssignmentRequest>,
) -> ApiResult<Json<AssignmentResponse>> {
    let assignment = AssignmentService::update_assignment(&state.db, id, request.into()).await?;

    Ok(Json(assignment.into()))
}

/// Delete an assignment and every submission made for it
#[utoipa::path(
    delete,
    path = "/api/assignments/{id}",
    params(
        ("id" = i32, Path, description = "Assignment ID")
    ),
    responses(
        (status = 200, description = "Assignment deleted", body = MessageResponse),
        (status = 404, description = "Assignment not found", body = MessageResponse)
    ),
    tag = "Assignments"
)]
pub async fn delete_assignment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<MessageResponse>> {
    AssignmentService::delete_assignment(&state.db, id).await?;

    Ok(Json(MessageResponse::new("Assignment deleted successfully")))
}
