use chrono::NaiveDateTime;
use database::{entities::assignments, services::assignment::AssignmentInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub max_points: i32,
    pub course_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<assignments::Model> for AssignmentResponse {
    fn from(assignment: assignments::Model) -> Self {
        Self {
            id: assignment.id,
            title: assignment.title,
            description: assignment.description,
            due_date: assignment.due_date,
            max_points: assignment.max_points,
            course_id: assignment.course_id,
            created_at: assignment.created_at,
            updated_at: assignment.updated_at,
        }
    }
}

/// Body of both create and update; an update replaces every field
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    /// Defaults to 100
    pub max_points: Option<i32>,
    pub course_id: Option<i32>,
}

impl From<AssignmentRequest> for AssignmentInput {
    fn from(request: AssignmentRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            due_date: request.due_date,
            max_points: request.max_points,
            course_id: request.course_id,
        }
    }
}
