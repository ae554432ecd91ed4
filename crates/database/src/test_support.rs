use crate::entities::{assignments, courses, forums, topics, users};
use migration::{Migrator, MigratorTrait};
use models::Role;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectOptions, Database, DatabaseConnection};

/// Fresh in-memory SQLite database with every migration applied.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

/// Inserts a user whose password column holds an unusable placeholder
pub async fn create_user(db: &DatabaseConnection, email: &str, role: Role) -> users::Model {
    users::ActiveModel {
        email: Set(email.to_string()),
        password: Set("unusable".to_string()),
        first_name: Set("Marie".to_string()),
        last_name: Set("Martin".to_string()),
        role: Set(role),
        status: Set(Default::default()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn create_course(db: &DatabaseConnection, teacher_id: i32) -> courses::Model {
    courses::ActiveModel {
        title: Set("Base de Données".to_string()),
        code: Set("BDD-M2".to_string()),
        credits: Set(4),
        teacher_id: Set(teacher_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn create_assignment(db: &DatabaseConnection, course_id: i32) -> assignments::Model {
    assignments::ActiveModel {
        title: Set("Modélisation BDD".to_string()),
        max_points: Set(100),
        course_id: Set(course_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn create_forum(db: &DatabaseConnection, name: &str) -> forums::Model {
    forums::ActiveModel {
        name: Set(name.to_string()),
        description: Set(format!("All about {name}")),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn create_topic(db: &DatabaseConnection, forum_id: i32, author_id: i32) -> topics::Model {
    topics::ActiveModel {
        title: Set("Observer pattern".to_string()),
        content: Set("How do I implement it?".to_string()),
        priority: Set(topics::DEFAULT_PRIORITY.to_string()),
        forum_id: Set(forum_id),
        author_id: Set(author_id),
        views: Set(0),
        likes_count: Set(0),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}
