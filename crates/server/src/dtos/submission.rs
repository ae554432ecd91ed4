use chrono::NaiveDateTime;
use database::{entities::submissions, services::submission::SubmissionInput};
use models::SubmissionStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub id: i32,
    pub assignment_id: i32,
    pub student_id: i32,
    pub content: Option<String>,
    #[schema(value_type = String, example = "SUBMITTED")]
    pub status: SubmissionStatus,
    pub grade: Option<i32>,
    pub feedback: Option<String>,
    pub submitted_at: NaiveDateTime,
    pub graded_at: Option<NaiveDateTime>,
}

impl From<submissions::Model> for SubmissionResponse {
    fn from(submission: submissions::Model) -> Self {
        Self {
            id: submission.id,
            assignment_id: submission.assignment_id,
            student_id: submission.student_id,
            content: submission.content,
            status: submission.status,
            grade: submission.grade,
            feedback: submission.feedback,
            submitted_at: submission.submitted_at,
            graded_at: submission.graded_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub assignment_id: Option<i32>,
    pub student_id: Option<i32>,
    pub content: Option<String>,
    #[schema(value_type = Option<String>, example = "SUBMITTED")]
    pub status: Option<SubmissionStatus>,
    pub grade: Option<i32>,
    pub feedback: Option<String>,
}

impl From<SubmissionRequest> for SubmissionInput {
    fn from(request: SubmissionRequest) -> Self {
        Self {
            assignment_id: request.assignment_id,
            student_id: request.student_id,
            content: request.content,
            status: request.status,
            grade: request.grade,
            feedback: request.feedback,
        }
    }
}
