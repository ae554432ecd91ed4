use super::{required, required_text};
use crate::{
    entities::{assignments, courses, submissions},
    error::{Result, ServiceError},
};
use chrono::NaiveDateTime;
use log::info;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, TransactionTrait,
};

/// Points an assignment is worth when none are given
pub const DEFAULT_MAX_POINTS: i32 = 100;

/// Body of a create or a full update
#[derive(Debug, Clone, Default)]
pub struct AssignmentInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub max_points: Option<i32>,
    pub course_id: Option<i32>,
}

pub struct AssignmentService;

impl AssignmentService {
    pub async fn get_all_assignments(db: &DatabaseConnection) -> Result<Vec<assignments::Model>> {
        Ok(assignments::Entity::find()
            .order_by_asc(assignments::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn get_assignment_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<assignments::Model>> {
        Ok(assignments::Entity::find_by_id(id).one(db).await?)
    }

    /// Assignments of one course, earliest due first
    pub async fn get_assignments_by_course(
        db: &DatabaseConnection,
        course_id: i32,
    ) -> Result<Vec<assignments::Model>> {
        Ok(assignments::Entity::find()
            .filter(assignments::Column::CourseId.eq(course_id))
            .order_by_asc(assignments::Column::DueDate)
            .order_by_asc(assignments::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn create_assignment(
        db: &DatabaseConnection,
        input: AssignmentInput,
    ) -> Result<assignments::Model> {
        let created = Self::validated(db, input).await?.insert(db).await?;
        info!("Created assignment {} for course {}", created.id, created.course_id);

        Ok(created)
    }

    /// Replace every editable field of an existing assignment
    pub async fn update_assignment(
        db: &DatabaseConnection,
        id: i32,
        input: AssignmentInput,
    ) -> Result<assignments::Model> {
        let existing = assignments::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("Assignment"))?;

        let replacement = Self::validated(db, input).await?;
        let mut assignment = existing.into_active_model();
        assignment.title = replacement.title;
        assignment.description = replacement.description;
        assignment.due_date = replacement.due_date;
        assignment.course_id = replacement.course_id;
        assignment.max_points = replacement.max_points;

        Ok(assignment.update(db).await?)
    }

    /// Delete an assignment together with its submissions
    pub async fn delete_assignment(db: &DatabaseConnection, id: i32) -> Result<()> {
        let txn = db.begin().await?;

        let removed = submissions::Entity::delete_many()
            .filter(submissions::Column::AssignmentId.eq(id))
            .exec(&txn)
            .await?;
        let result = assignments::Entity::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(ServiceError::NotFound("Assignment"));
        }

        txn.commit().await?;
        info!(
            "Deleted assignment {id} and {} submission(s)",
            removed.rows_affected
        );

        Ok(())
    }

    /// Checks the input and returns an unsaved model
    async fn validated(
        db: &DatabaseConnection,
        input: AssignmentInput,
    ) -> Result<assignments::ActiveModel> {
        let title = required_text(input.title, "title")?;
        let course_id = required(input.course_id, "courseId")?;

        if courses::Entity::find_by_id(course_id).one(db).await?.is_none() {
            return Err(ServiceError::validation("Course not found"));
        }

        Ok(assignments::ActiveModel {
            title: Set(title),
            description: Set(input.description),
            due_date: Set(input.due_date),
            course_id: Set(course_id),
            max_points: Set(input.max_points.unwrap_or(DEFAULT_MAX_POINTS)),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{create_course, create_user, setup_db};
    use models::{Role, SubmissionStatus};
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn create_applies_default_points_and_checks_course() {
        let db = setup_db().await;
        let teacher = create_user(&db, "prof@campus.fr", Role::Teacher).await;
        let course = create_course(&db, teacher.id).await;

        let assignment = AssignmentService::create_assignment(
            &db,
            AssignmentInput {
                title: Some("Projet React".to_string()),
                course_id: Some(course.id),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(assignment.max_points, DEFAULT_MAX_POINTS);
        assert_eq!(assignment.created_at, assignment.updated_at);

        let err = AssignmentService::create_assignment(
            &db,
            AssignmentInput {
                title: Some("Orphan".to_string()),
                course_id: Some(999),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == "Course not found"));
    }

    #[tokio::test]
    async fn lists_assignments_by_course() {
        let db = setup_db().await;
        let teacher = create_user(&db, "prof@campus.fr", Role::Teacher).await;
        let first = create_course(&db, teacher.id).await;
        let second = create_course(&db, teacher.id).await;

        for course_id in [first.id, first.id, second.id] {
            AssignmentService::create_assignment(
                &db,
                AssignmentInput {
                    title: Some("Homework".to_string()),
                    course_id: Some(course_id),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        }

        let listed = AssignmentService::get_assignments_by_course(&db, first.id)
            .await
            .unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|a| a.course_id == first.id));
    }

    #[tokio::test]
    async fn delete_cascades_to_submissions() {
        let db = setup_db().await;
        let teacher = create_user(&db, "prof@campus.fr", Role::Teacher).await;
        let student = create_user(&db, "etudiant@campus.fr", Role::Student).await;
        let course = create_course(&db, teacher.id).await;
        let assignment = AssignmentService::create_assignment(
            &db,
            AssignmentInput {
                title: Some("Projet".to_string()),
                course_id: Some(course.id),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        submissions::ActiveModel {
            assignment_id: Set(assignment.id),
            student_id: Set(student.id),
            status: Set(SubmissionStatus::Submitted),
            submitted_at: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        AssignmentService::delete_assignment(&db, assignment.id)
            .await
            .unwrap();

        assert!(
            AssignmentService::get_assignment_by_id(&db, assignment.id)
                .await
                .unwrap()
                .is_none()
        );
        assert_eq!(submissions::Entity::find().count(&db).await.unwrap(), 0);

        let err = AssignmentService::delete_assignment(&db, assignment.id)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound("Assignment")));
    }
}
