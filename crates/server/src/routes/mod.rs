pub mod assignment;
pub mod auth;
pub mod course;
pub mod forum;
pub mod health;
pub mod root;
pub mod submission;
pub mod topic;
pub mod user;

use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Every `/api` endpoint
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/register", post(auth::register))
        .route("/users", get(user::get_users))
        .route("/users/{id}", get(user::get_user_by_id))
        .route("/courses", get(course::get_courses).post(course::create_course))
        .route(
            "/courses/{id}",
            get(course::get_course_by_id)
                .put(course::update_course)
                .delete(course::delete_course),
        )
        .route(
            "/assignments",
            get(assignment::get_assignments).post(assignment::create_assignment),
        )
        .route(
            "/assignments/{id}",
            get(assignment::get_assignment_by_id)
                .put(assignment::update_assignment)
                .delete(assignment::delete_assignment),
        )
        .route(
            "/assignments/course/{course_id}",
            get(assignment::get_assignments_by_course),
        )
        .route(
            "/submissions",
            get(submission::get_submissions).post(submission::create_submission),
        )
        .route(
            "/submissions/{id}",
            get(submission::get_submission_by_id)
                .put(submission::update_submission)
                .delete(submission::delete_submission),
        )
        .route(
            "/submissions/assignment/{assignment_id}",
            get(submission::get_submissions_by_assignment),
        )
        .route(
            "/submissions/student/{student_id}",
            get(submission::get_submissions_by_student),
        )
        .route("/forums", get(forum::get_forums).post(forum::create_forum))
        .route("/forums/{id}/topics", get(forum::get_topics_by_forum))
        .route("/forums/topics", post(forum::create_topic))
        .route("/forums/topics/{id}", get(forum::get_forum_topic))
        .route("/forums/topics/{id}/posts", get(forum::get_forum_topic_posts))
        .route("/topics/{id}", get(topic::get_topic))
        .route("/topics/{id}/posts", get(topic::get_posts).post(topic::create_post))
        .route("/topics/{id}/view", post(topic::view_topic))
        .route("/topics/{id}/like", post(topic::like_topic))
        .route("/topics/posts/{post_id}/like", post(topic::like_post))
}
