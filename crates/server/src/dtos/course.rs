use chrono::NaiveDateTime;
use database::{
    entities::courses,
    services::course::{CourseChanges, NewCourse},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub code: String,
    pub credits: i32,
    pub semester: Option<String>,
    pub teacher_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<courses::Model> for CourseResponse {
    fn from(course: courses::Model) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            code: course.code,
            credits: course.credits,
            semester: course.semester,
            teacher_id: course.teacher_id,
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}

/// New course; the code is derived from the title
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub semester: Option<String>,
    /// Defaults to 3
    pub credits: Option<i32>,
}

impl From<CreateCourseRequest> for NewCourse {
    fn from(request: CreateCourseRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            semester: request.semester,
            credits: request.credits,
        }
    }
}

/// Partial update: absent fields keep their stored value
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub credits: Option<i32>,
    pub semester: Option<String>,
}

impl From<UpdateCourseRequest> for CourseChanges {
    fn from(request: UpdateCourseRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            code: request.code,
            credits: request.credits,
            semester: request.semester,
        }
    }
}
