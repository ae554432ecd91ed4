use crate::{
    dtos::{
        MessageResponse,
        course::{CourseResponse, CreateCourseRequest, UpdateCourseRequest},
    },
    error::{ApiError, ApiResult},
    extract::{ApiJson, ApiPath},
    state::AppState,
};
use axum::{Json, extract::State};
use database::services::course::CourseService;

/// Get every course
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "List of courses", body = Vec<CourseResponse>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Courses"
)]
pub async fn get_courses(State(state): State<AppState>) -> ApiResult<Json<Vec<CourseResponse>>> {
    let courses = CourseService::get_all_courses(&state.db).await?;

    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// Get a specific course by ID
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found", body = MessageResponse)
    ),
    tag = "Courses"
)]
pub async fn get_course_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<CourseResponse>> {
    CourseService::get_course_by_id(&state.db, id)
        .await?
        .map(|course| Json(course.into()))
        .ok_or_else(|| ApiError::NotFound("Course not found".to_string()))
}

/// Create a course; its code is generated from the title
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 200, description = "Course created", body = CourseResponse),
        (status = 400, description = "Missing title or unknown teacher", body = MessageResponse)
    ),
    tag = "Courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateCourseRequest>,
) -> ApiResult<Json<CourseResponse>> {
    let course = CourseService::create_course(
        &state.db,
        request.into(),
        state.config.placeholder_teacher_id,
    )
    .await?;

    Ok(Json(course.into()))
}

/// Update the fields present in the body, keeping the others
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 404, description = "Course not found", body = MessageResponse)
    ),
    tag = "Courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<UpdateCourseRequest>,
) -> ApiResult<Json<CourseResponse>> {
    let course = CourseService::update_course(&state.db, id, request.into()).await?;

    Ok(Json(course.into()))
}

/// Delete a course with its assignments
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course deleted", body = MessageResponse),
        (status = 404, description = "Course not found", body = MessageResponse)
    ),
    tag = "Courses"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<MessageResponse>> {
    CourseService::delete_course(&state.db, id).await?;

    Ok(Json(MessageResponse::new("Course deleted successfully")))
}
