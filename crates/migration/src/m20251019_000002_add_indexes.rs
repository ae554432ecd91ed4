use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_teacher_id")
                    .table(Courses::Table)
                    .col(Courses::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_assignments_course_id")
                    .table(Assignments::Table)
                    .col(Assignments::CourseId)
                    .to_owned(),
            )
            .await?;

        // One submission per student per assignment
        manager
            .create_index(
                Index::create()
                    .name("idx_submissions_assignment_student")
                    .table(Submissions::Table)
                    .col(Submissions::AssignmentId)
                    .col(Submissions::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_submissions_student_id")
                    .table(Submissions::Table)
                    .col(Submissions::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_topics_forum_id")
                    .table(Topics::Table)
                    .col(Topics::ForumId)
                    .to_owned(),
            )
            .await?;

        // Posts are always read per topic in creation order
        manager
            .create_index(
                Index::create()
                    .name("idx_posts_topic_id_created_at")
                    .table(Posts::Table)
                    .col(Posts::TopicId)
                    .col(Posts::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table) in [
            ("idx_posts_topic_id_created_at", Posts::Table.into_iden()),
            ("idx_topics_forum_id", Topics::Table.into_iden()),
            ("idx_submissions_student_id", Submissions::Table.into_iden()),
            (
                "idx_submissions_assignment_student",
                Submissions::Table.into_iden(),
            ),
            ("idx_assignments_course_id", Assignments::Table.into_iden()),
            ("idx_courses_teacher_id", Courses::Table.into_iden()),
        ] {
            manager
                .drop_index(Index::drop().name(name).table(table).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(Iden)]
enum Courses {
    Table,
    TeacherId,
}

#[derive(Iden)]
enum Assignments {
    Table,
    CourseId,
}

#[derive(Iden)]
enum Submissions {
    Table,
    AssignmentId,
    StudentId,
}

#[derive(Iden)]
enum Topics {
    Table,
    ForumId,
}

#[derive(Iden)]
enum Posts {
    Table,
    TopicId,
    CreatedAt,
}
