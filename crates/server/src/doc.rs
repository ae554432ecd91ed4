use crate::routes::{assignment, auth, course, forum, health, root, submission, topic, user};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        auth::login,
        auth::register,
        user::get_users,
        user::get_user_by_id,
        course::get_courses,
        course::get_course_by_id,
        course::create_course,
        course::update_course,
        course::delete_course,
        assignment::get_assignments,
        assignment::get_assignment_by_id,
        assignment::get_assignments_by_course,
        assignment::create_assignment,
        assignment::update_assignment,
        assignment::delete_assignment,
        submission::get_submissions,
        submission::get_submission_by_id,
        submission::get_submissions_by_assignment,
        submission::get_submissions_by_student,
        submission::create_submission,
        submission::update_submission,
        submission::delete_submission,
        forum::get_forums,
        forum::create_forum,
        forum::get_topics_by_forum,
        forum::get_forum_topic,
        forum::get_forum_topic_posts,
        forum::create_topic,
        topic::get_topic,
        topic::get_posts,
        topic::create_post,
        topic::like_post,
        topic::view_topic,
        topic::like_topic,
    ),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Authentication", description = "Login and registration"),
        (name = "Users", description = "User directory"),
        (name = "Courses", description = "Course catalogue"),
        (name = "Assignments", description = "Course assignments"),
        (name = "Submissions", description = "Student work and grading"),
        (name = "Forums", description = "Discussion forums and their topics"),
        (name = "Topics", description = "Topic details, replies and counters"),
    ),
    info(
        title = "Campus API",
        version = "1.0.0",
        description = "Campus learning-management API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_api_path() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/forums/{id}/topics"));
        assert!(doc.paths.paths.contains_key("/api/topics/posts/{post_id}/like"));
        assert!(doc.paths.paths.contains_key("/api/submissions/student/{student_id}"));
    }
}
