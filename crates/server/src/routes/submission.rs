use crate::{
    dtos::{
        MessageResponse,
        submission::{SubmissionRequest, SubmissionResponse},
    },
    error::{ApiError, ApiResult},
    extract::{ApiJson, ApiPath},
    state::AppState,
};
use axum::{Json, extract::State};
use database::{entities::submissions, services::submission::SubmissionService};

fn to_responses(submissions: Vec<submissions::Model>) -> Json<Vec<SubmissionResponse>> {
    Json(submissions.into_iter().map(SubmissionResponse::from).collect())
}

#[utoipa::path(
    get,
    path = "/api/submissions",
    responses(
        (status = 200, description = "Every submission", body = Vec<SubmissionResponse>)
    ),
    tag = "Submissions"
)]
pub async fn get_submissions(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<SubmissionResponse>>> {
    Ok(to_responses(
        SubmissionService::get_all_submissions(&state.db).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/submissions/{id}",
    params(
        ("id" = i32, Path, description = "Submission ID")
    ),
    responses(
        (status = 200, description = "Submission found", body = SubmissionResponse),
        (status = 404, description = "Submission not found", body = MessageResponse)
    ),
    tag = "Submissions"
)]
pub async fn get_submission_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<SubmissionResponse>> {
    SubmissionService::get_submission_by_id(&state.db, id)
        .await?
        .map(|submission| Json(submission.into()))
        .ok_or_else(|| ApiError::NotFound("Submission not found".to_string()))
}

#[utoipa::path(
    get,
    path = "/api/submissions/assignment/{assignment_id}",
    params(
        ("assignment_id" = i32, Path, description = "Assignment ID")
    ),
    responses(
        (status = 200, description = "Submissions for the assignment", body = Vec<SubmissionResponse>)
    ),
    tag = "Submissions"
)]
pub async fn get_submissions_by_assignment(
    State(state): State<AppState>,
    ApiPath(assignment_id): ApiPath<i32>,
) -> ApiResult<Json<Vec<SubmissionResponse>>> {
    Ok(to_responses(
        SubmissionService::get_submissions_by_assignment(&state.db, assignment_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/submissions/student/{student_id}",
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Submissions by the student", body = Vec<SubmissionResponse>)
    ),
    tag = "Submissions"
)]
pub async fn get_submissions_by_student(
    State(state): State<AppState>,
    ApiPath(student_id): ApiPath<i32>,
) -> ApiResult<Json<Vec<SubmissionResponse>>> {
    Ok(to_responses(
        SubmissionService::get_submissions_by_student(&state.db, student_id).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/submissions",
    request_body = SubmissionRequest,
    responses(
        (status = 200, description = "Submission recorded", body = SubmissionResponse),
        (status = 400, description = "Unknown assignment or student, or already submitted", body = MessageResponse)
    ),
    tag = "Submissions"
)]
pub async fn create_submission(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SubmissionRequest>,
) -> ApiResult<Json<SubmissionResponse>> {
    let submission = SubmissionService::create_submission(&state.db, request.into()).await?;

    Ok(Json(submission.into()))
}

/// Replace a submission, typically to grade it
#[utoipa::path(
    put,
    path = "/api/submissions/{id}",
    params(
        ("id" = i32, Path, description = "Submission ID")
    ),
    request_body = SubmissionRequest,
    responses(
        (status = 200, description = "Submission updated", body = SubmissionResponse),
        (status = 400, description = "Unknown assignment or student", body = MessageResponse),
        (status = 404, description = "Submission not found", body = MessageResponse)
    ),
    tag = "Submissions"
)]
pub async fn update_submission(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<SubmissionRequest>,
) -> ApiResult<Json<SubmissionResponse>> {
    let submission = SubmissionService::update_submission(&state.db, id, request.into()).await?;

    Ok(Json(submission.into()))
}

#[utoipa::path(
    delete,
    path = "/api/submissions/{id}",
    params(
        ("id" = i32, Path, description = "Submission ID")
    ),
    responses(
        (status = 200, description = "Submission deleted", body = MessageResponse),
        (status = 404, description = "Submission not found", body = MessageResponse)
    ),
    tag = "Submissions"
)]
pub async fn delete_submission(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<MessageResponse>> {
    SubmissionService::delete_submission(&state.db, id).await?;

    Ok(Json(MessageResponse::new("Submission deleted successfully")))
}
