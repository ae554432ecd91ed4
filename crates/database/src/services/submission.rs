use super::required;
use crate::{
    entities::{assignments, submissions, users},
    error::{Result, ServiceError},
};
use chrono::{NaiveDateTime, Utc};
use log::info;
use models::SubmissionStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

const DUPLICATE_SUBMISSION: &str = "A submission already exists for this assignment and student";

/// Body of a create or a full update
#[derive(Debug, Clone, Default)]
pub struct SubmissionInput {
    pub assignment_id: Option<i32>,
    pub student_id: Option<i32>,
    pub content: Option<String>,
    pub status: Option<SubmissionStatus>,
    pub grade: Option<i32>,
    pub feedback: Option<String>,
}

/// Status to store: a graded submission that was still pending becomes `Graded`
fn effective_status(status: SubmissionStatus, grade: Option<i32>) -> SubmissionStatus {
    if grade.is_some() && status.is_pending() {
        SubmissionStatus::Graded
    } else {
        status
    }
}

/// `graded_at` keeps the first grading time; it resets when the grade is removed
fn graded_at(
    previous: Option<NaiveDateTime>,
    grade: Option<i32>,
    now: NaiveDateTime,
) -> Option<NaiveDateTime> {
    grade.map(|_| previous.unwrap_or(now))
}

pub struct SubmissionService;

impl SubmissionService {
    pub async fn get_all_submissions(db: &DatabaseConnection) -> Result<Vec<submissions::Model>> {
        Ok(submissions::Entity::find()
            .order_by_asc(submissions::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn get_submission_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<submissions::Model>> {
        Ok(submissions::Entity::find_by_id(id).one(db).await?)
    }

    pub async fn get_submissions_by_assignment(
        db: &DatabaseConnection,
        assignment_id: i32,
    ) -> Result<Vec<submissions::Model>> {
        Ok(submissions::Entity::find()
            .filter(submissions::Column::AssignmentId.eq(assignment_id))
            .order_by_asc(submissions::Column::SubmittedAt)
            .all(db)
            .await?)
    }

    pub async fn get_submissions_by_student(
        db: &DatabaseConnection,
        student_id: i32,
    ) -> Result<Vec<submissions::Model>> {
        Ok(submissions::Entity::find()
            .filter(submissions::Column::StudentId.eq(student_id))
            .order_by_asc(submissions::Column::SubmittedAt)
            .all(db)
            .await?)
    }

    pub async fn create_submission(
        db: &DatabaseConnection,
        input: SubmissionInput,
    ) -> Result<submissions::Model> {
        let (assignment_id, student_id) = Self::check_references(db, &input).await?;
        let now = Utc::now().naive_utc();
        let status = effective_status(input.status.unwrap_or_default(), input.grade);

        let created = submissions::ActiveModel {
            assignment_id: Set(assignment_id),
            student_id: Set(student_id),
            content: Set(input.content),
            status: Set(status),
            grade: Set(input.grade),
            feedback: Set(input.feedback),
            submitted_at: Set(now),
            graded_at: Set(graded_at(None, input.grade, now)),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(|e| ServiceError::from_write(e, DUPLICATE_SUBMISSION))?;

        info!(
            "Student {} submitted assignment {}",
            created.student_id, created.assignment_id
        );
        Ok(created)
    }

    /// Replace the submission's fields; `submitted_at` is kept
    pub async fn update_submission(
        db: &DatabaseConnection,
        id: i32,
        input: SubmissionInput,
    ) -> Result<submissions::Model> {
        let existing = submissions::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("Submission"))?;
        let (assignment_id, student_id) = Self::check_references(db, &input).await?;
        let now = Utc::now().naive_utc();
        let status = effective_status(input.status.unwrap_or(existing.status), input.grade);
        let graded_time = graded_at(existing.graded_at, input.grade, now);

        let mut submission = existing.into_active_model();
        submission.assignment_id = Set(assignment_id);
        submission.student_id = Set(student_id);
        submission.content = Set(input.content);
        submission.status = Set(status);
        submission.grade = Set(input.grade);
        submission.feedback = Set(input.feedback);
        submission.graded_at = Set(graded_time);

        submission
            .update(db)
            .await
            .map_err(|e| ServiceError::from_write(e, DUPLICATE_SUBMISSION))
    }

    pub async fn delete_submission(db: &DatabaseConnection, id: i32) -> Result<()> {
        let result = submissions::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("Submission"));
        }

        Ok(())
    }

    async fn check_references(
        db: &DatabaseConnection,
        input: &SubmissionInput,
    ) -> Result<(i32, i32)> {
        let assignment_id = required(input.assignment_id, "assignmentId")?;
        let student_id = required(input.student_id, "studentId")?;

        if assignments::Entity::find_by_id(assignment_id)
            .one(db)
            .await?
            .is_none()
        {
            return Err(ServiceError::validation("Assignment not found"));
        }
        if users::Entity::find_by_id(student_id).one(db).await?.is_none() {
            return Err(ServiceError::validation("Student not found"));
        }

        Ok((assignment_id, student_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{create_assignment, create_course, create_user, setup_db};
    use models::Role;

    struct Fixture {
        db: DatabaseConnection,
        assignment_id: i32,
        student_id: i32,
    }

    async fn fixture() -> Fixture {
        let db = setup_db().await;
        let teacher = create_user(&db, "prof@campus.fr", Role::Teacher).await;
        let student = create_user(&db, "etudiant@campus.fr", Role::Student).await;
        let course = create_course(&db, teacher.id).await;
        let assignment = create_assignment(&db, course.id).await;

        Fixture {
            db,
            assignment_id: assignment.id,
            student_id: student.id,
        }
    }

    fn input(f: &Fixture) -> SubmissionInput {
        SubmissionInput {
            assignment_id: Some(f.assignment_id),
            student_id: Some(f.student_id),
            content: Some("My answer".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_grade_promotes_pending_status() {
        assert_eq!(
            effective_status(SubmissionStatus::Late, Some(12)),
            SubmissionStatus::Graded
        );
        assert_eq!(
            effective_status(SubmissionStatus::Submitted, None),
            SubmissionStatus::Submitted
        );
    }

    #[tokio::test]
    async fn create_defaults_to_submitted() {
        let f = fixture().await;

        let created = SubmissionService::create_submission(&f.db, input(&f))
            .await
            .unwrap();

        assert_eq!(created.status, SubmissionStatus::Submitted);
        assert_eq!(created.grade, None);
        assert_eq!(created.graded_at, None);
    }

    #[tokio::test]
    async fn second_submission_for_same_assignment_conflicts() {
        let f = fixture().await;
        SubmissionService::create_submission(&f.db, input(&f))
            .await
            .unwrap();

        let err = SubmissionService::create_submission(&f.db, input(&f))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn grading_sets_status_and_time_once() {
        let f = fixture().await;
        let created = SubmissionService::create_submission(&f.db, input(&f))
            .await
            .unwrap();

        let graded = SubmissionService::update_submission(
            &f.db,
            created.id,
            SubmissionInput {
                grade: Some(15),
                feedback: Some("Good".to_string()),
                ..input(&f)
            },
        )
        .await
        .unwrap();
        assert_eq!(graded.status, SubmissionStatus::Graded);
        let first_graded_at = graded.graded_at.expect("graded_at set");

        let regraded = SubmissionService::update_submission(
            &f.db,
            created.id,
            SubmissionInput {
                grade: Some(17),
                ..input(&f)
            },
        )
        .await
        .unwrap();
        assert_eq!(regraded.grade, Some(17));
        assert_eq!(regraded.graded_at, Some(first_graded_at));
        assert_eq!(regraded.submitted_at, created.submitted_at);
    }

    #[tokio::test]
    async fn filters_by_assignment_and_student() {
        let f = fixture().await;
        SubmissionService::create_submission(&f.db, input(&f))
            .await
            .unwrap();

        let by_assignment =
            SubmissionService::get_submissions_by_assignment(&f.db, f.assignment_id)
                .await
                .unwrap();
        let by_student = SubmissionService::get_submissions_by_student(&f.db, f.student_id)
            .await
            .unwrap();
        let by_other = SubmissionService::get_submissions_by_student(&f.db, f.student_id + 100)
            .await
            .unwrap();

        assert_eq!(by_assignment.len(), 1);
        assert_eq!(by_student, by_assignment);
        assert!(by_other.is_empty());
    }

    #[tokio::test]
    async fn unknown_student_is_rejected() {
        let f = fixture().await;

        let err = SubmissionService::create_submission(
            &f.db,
            SubmissionInput {
                student_id: Some(999),
                ..input(&f)
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(ref m) if m == "Student not found"));
    }
}
