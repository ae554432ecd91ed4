use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use database::services::seed::SeedService;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use serde_json::{Value, json};
use server::{app, config::Config, state::AppState};
use tokio::task::JoinSet;
use tower::ServiceExt;

const ADMIN_ID: i32 = 1;
const TEACHER_ID: i32 = 2;
const STUDENT_ID: i32 = 3;

fn test_config(placeholder_teacher_id: i32) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        cors_origin: "http://localhost:3000".to_string(),
        placeholder_author_id: ADMIN_ID,
        placeholder_teacher_id,
        run_migrations: true,
        seed_database: true,
    }
}

/// App over a fresh, seeded in-memory database
async fn seeded_app_with(config: Config) -> Router {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    SeedService::seed_if_empty(&db).await.unwrap();

    app(AppState::new(db, config))
}

async fn seeded_app() -> Router {
    seeded_app_with(test_config(TEACHER_ID)).await
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

#[tokio::test]
async fn health_root_and_openapi() {
    let app = seeded_app().await;

    assert_eq!(get(&app, "/health").await, (StatusCode::OK, json!("OK")));

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["docs"], "/api-docs/openapi.json");

    let (status, doc) = get(&app, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/courses/{id}"].is_object());
}

#[tokio::test]
async fn login_failures_share_one_response() {
    let app = seeded_app().await;

    let (status, body) = post(
        &app,
        "/api/auth/login",
        json!({"email": "prof@campus.fr", "password": "password"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token"], "mock-jwt-token");
    assert_eq!(body["user"]["role"], "TEACHER");
    assert!(body["user"].get("password").is_none());

    let wrong_password = post(
        &app,
        "/api/auth/login",
        json!({"email": "prof@campus.fr", "password": "nope"}),
    )
    .await;
    let unknown_email = post(
        &app,
        "/api/auth/login",
        json!({"email": "ghost@campus.fr", "password": "password"}),
    )
    .await;

    assert_eq!(wrong_password.0, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password, unknown_email);
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let app = seeded_app().await;
    let registration = json!({
        "firstName": "Paul",
        "lastName": "Durand",
        "email": "paul@campus.fr",
        "password": "secret",
        "role": "student"
    });

    let (status, body) = post(&app, "/api/auth/register", registration.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["status"], "ACTIVE");
    assert_eq!(body["user"]["role"], "STUDENT");

    let (status, body) = post(&app, "/api/auth/register", registration).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already exists");
}

#[tokio::test]
async fn users_never_expose_passwords() {
    let app = seeded_app().await;

    let (status, users) = get(&app, "/api/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(users.as_array().unwrap().len(), 3);
    assert!(users[0].get("password").is_none());

    let (status, student) = get(&app, &format!("/api/users/{STUDENT_ID}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(student["firstName"], "Marie");

    let (status, body) = get(&app, "/api/users/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn course_code_is_generated_and_credits_default() {
    let app = seeded_app().await;

    let (status, course) = post(
        &app,
        "/api/courses",
        json!({"title": "Intro to Rust 101", "semester": "S2"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(course["code"], "INTROTOR-M2");
    assert_eq!(course["credits"], 3);
    assert_eq!(course["teacherId"], TEACHER_ID);
}

#[tokio::test]
async fn course_creation_needs_an_existing_teacher() {
    let app = seeded_app_with(test_config(5)).await;

    let (status, body) = post(&app, "/api/courses", json!({"title": "Réseaux"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Teacher not found");
}

#[tokio::test]
async fn partial_course_update_only_touches_given_fields() {
    let app = seeded_app().await;
    let (_, before) = get(&app, "/api/courses/1").await;

    let (status, after) = send(&app, Method::PUT, "/api/courses/1", Some(json!({"credits": 5}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(after["credits"], 5);
    for field in ["title", "description", "code", "semester", "teacherId"] {
        assert_eq!(after[field], before[field], "{field} changed");
    }

    let (status, body) = send(&app, Method::PUT, "/api/courses/99", Some(json!({"credits": 5}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Course not found");
}

#[tokio::test]
async fn deleting_an_assignment_removes_its_submissions() {
    let app = seeded_app().await;

    let (status, submission) = post(
        &app,
        "/api/submissions",
        json!({"assignmentId": 1, "studentId": STUDENT_ID, "content": "https://git.example/react"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(submission["status"], "SUBMITTED");

    let (status, by_student) = get(&app, &format!("/api/submissions/student/{STUDENT_ID}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_student.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::DELETE, "/api/assignments/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!("/api/submissions/{}", submission["id"]);
    assert_eq!(get(&app, &uri).await.0, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/api/assignments/1").await.0, StatusCode::NOT_FOUND);
    assert_eq!(
        send(&app, Method::DELETE, "/api/assignments/1", None).await.0,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn grading_a_submission() {
    let app = seeded_app().await;
    let (_, submission) = post(
        &app,
        "/api/submissions",
        json!({"assignmentId": 2, "studentId": STUDENT_ID}),
    )
    .await;

    let (status, graded) = send(
        &app,
        Method::PUT,
        &format!("/api/submissions/{}", submission["id"]),
        Some(json!({
            "assignmentId": 2,
            "studentId": STUDENT_ID,
            "grade": 16,
            "feedback": "Bon travail"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(graded["status"], "GRADED");
    assert_eq!(graded["grade"], 16);
    assert!(graded["gradedAt"].is_string());
}

#[tokio::test]
async fn forums_list_topic_counts() {
    let app = seeded_app().await;

    let (status, forums) = get(&app, "/api/forums").await;

    assert_eq!(status, StatusCode::OK);
    let forums = forums.as_array().unwrap();
    assert_eq!(forums.len(), 5);
    assert_eq!(forums[0]["name"], "Architecture Logicielle");
    assert_eq!(forums[0]["topicCount"], 1);
    assert_eq!(forums[3]["topicCount"], 0);
}

#[tokio::test]
async fn empty_forum_has_no_topics() {
    let app = seeded_app().await;

    assert_eq!(get(&app, "/api/forums/4/topics").await, (StatusCode::OK, json!([])));
}

#[tokio::test]
async fn forum_topics_carry_author_and_post_count() {
    let app = seeded_app().await;

    let (status, topics) = get(&app, "/api/forums/1/topics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(topics[0]["authorName"], "Marie Martin");
    assert_eq!(topics[0]["postCount"], 2);
    assert_eq!(topics[0]["views"], 0);
}

#[tokio::test]
async fn topic_lookup_by_either_path() {
    let app = seeded_app().await;

    for uri in ["/api/topics/1", "/api/forums/topics/1"] {
        let (status, topic) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(topic["forumId"], 1);
        assert_eq!(topic["forumName"], "Architecture Logicielle");
        assert_eq!(topic["likesCount"], 0);
    }

    let (status, body) = get(&app, "/api/topics/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Topic not found");
}

#[tokio::test]
async fn posts_are_listed_oldest_first() {
    let app = seeded_app().await;

    let (status, posts) = get(&app, "/api/topics/1/posts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(posts[0]["authorName"], "Jean Dupont");
    assert_eq!(posts[0]["likes"], 5);
    assert_eq!(posts[0]["isLiked"], false);
    assert_eq!(posts[1]["authorName"], "Admin Campus");

    assert_eq!(get(&app, "/api/forums/topics/1/posts").await, (status, posts));
}

#[tokio::test]
async fn post_under_missing_topic_is_rejected() {
    let app = seeded_app().await;

    let (status, body) = post(&app, "/api/topics/999/posts", json!({"content": "Hello"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Topic not found");
    assert_eq!(get(&app, "/api/topics/999/posts").await.1, json!([]));
}

#[tokio::test]
async fn malformed_input_answers_bad_request_with_message() {
    let app = seeded_app().await;

    let topic = json!({"title": "T", "content": "C", "priority": "normal", "forumId": "1"});
    let (status, body) = post(&app, "/api/forums/topics", topic).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("forumId"));

    let (status, body) = send(&app, Method::PUT, "/api/courses/1", Some(json!({"credits": "five"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let (status, body) = get(&app, "/api/topics/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let (status, body) = post(&app, "/api/auth/login", json!({"email": 5})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn new_posts_and_topics_use_the_placeholder_author() {
    let app = seeded_app().await;

    let (status, _) = post(&app, "/api/topics/1/posts", json!({"content": "Merci !"})).await;
    assert_eq!(status, StatusCode::OK);
    let (_, posts) = get(&app, "/api/topics/1/posts").await;
    assert_eq!(posts.as_array().unwrap().len(), 3);
    assert_eq!(posts[2]["authorName"], "Admin Campus");
    assert_eq!(posts[2]["likes"], 0);

    let (status, body) = post(
        &app,
        "/api/forums/topics",
        json!({"title": "GPT", "content": "Retours ?", "priority": "high", "forumId": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Topic created successfully");
    let (_, topics) = get(&app, "/api/forums/2/topics").await;
    assert_eq!(topics[0]["authorName"], "Admin Campus");

    let (status, body) = post(
        &app,
        "/api/forums/topics",
        json!({"title": "GPT", "content": "Retours ?", "priority": "high", "forumId": 42}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Forum not found");
}

#[tokio::test]
async fn concurrent_views_and_likes_all_count() {
    let app = seeded_app().await;
    let mut requests = JoinSet::new();

    for i in 0..20 {
        let app = app.clone();
        let uri = if i % 2 == 0 {
            "/api/topics/1/view"
        } else {
            "/api/topics/1/like"
        };
        requests.spawn(async move { post(&app, uri, json!({})).await.0 });
    }
    while let Some(status) = requests.join_next().await {
        assert_eq!(status.unwrap(), StatusCode::OK);
    }

    let (_, topic) = get(&app, "/api/topics/1").await;
    assert_eq!(topic["views"], 10);
    assert_eq!(topic["likesCount"], 10);

    assert_eq!(
        post(&app, "/api/topics/999/view", json!({})).await.0,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn liking_a_post() {
    let app = seeded_app().await;

    let (status, body) = post(&app, "/api/topics/posts/2/like", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Post liked successfully");

    let (_, posts) = get(&app, "/api/topics/1/posts").await;
    assert_eq!(posts[1]["likes"], 3);
}
