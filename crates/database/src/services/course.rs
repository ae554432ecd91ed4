use super::required;
use crate::{
    entities::{courses, users},
    error::{Result, ServiceError},
};
use log::info;
use models::course_code::generate_course_code;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryOrder,
};

/// Credits given to a course created without any
pub const DEFAULT_CREDITS: i32 = 3;

/// Fields accepted when creating a course. The code is always generated.
#[derive(Debug, Clone, Default)]
pub struct NewCourse {
    pub title: Option<String>,
    pub description: Option<String>,
    pub semester: Option<String>,
    pub credits: Option<i32>,
}

/// A partial update: `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct CourseChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub credits: Option<i32>,
    pub semester: Option<String>,
}

pub struct CourseService;

impl CourseService {
    pub async fn get_all_courses(db: &DatabaseConnection) -> Result<Vec<courses::Model>> {
        Ok(courses::Entity::find()
            .order_by_asc(courses::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn get_course_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<courses::Model>> {
        Ok(courses::Entity::find_by_id(id).one(db).await?)
    }

    /// Create a course taught by `teacher_id`, deriving its code from the title
    pub async fn create_course(
        db: &DatabaseConnection,
        course: NewCourse,
        teacher_id: i32,
    ) -> Result<courses::Model> {
        let title = required(course.title, "title")?;

        if users::Entity::find_by_id(teacher_id).one(db).await?.is_none() {
            return Err(ServiceError::validation("Teacher not found"));
        }

        let code = generate_course_code(&title);
        let created = courses::ActiveModel {
            title: Set(title),
            description: Set(course.description),
            code: Set(code),
            credits: Set(course.credits.unwrap_or(DEFAULT_CREDITS)),
            semester: Set(course.semester),
            teacher_id: Set(teacher_id),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!("Created course {} ({})", created.id, created.code);
        Ok(created)
    }

    /// Apply a partial update; only the fields present in `changes` are written
    pub async fn update_course(
        db: &DatabaseConnection,
        id: i32,
        changes: CourseChanges,
    ) -> Result<courses::Model> {
        let existing = courses::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("Course"))?;

        let mut course = existing.into_active_model();
        if let Some(title) = changes.title {
            course.title = Set(title);
        }
        if let Some(description) = changes.description {
            course.description = Set(Some(description));
        }
        if let Some(code) = changes.code {
            course.code = Set(code);
        }
        if let Some(credits) = changes.credits {
            course.credits = Set(credits);
        }
        if let Some(semester) = changes.semester {
            course.semester = Set(Some(semester));
        }

        Ok(course.update(db).await?)
    }

    pub async fn delete_course(db: &DatabaseConnection, id: i32) -> Result<()> {
        let result = courses::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("Course"));
        }

        Ok(())
    }
}
