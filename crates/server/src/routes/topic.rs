use crate::{
    dtos::{
        MessageResponse,
        forum::{CreatePostRequest, PostResponse, TopicResponse},
    },
    error::ApiResult,
    extract::{ApiJson, ApiPath},
    state::AppState,
};
use axum::{Json, extract::State};
use database::services::{
    post::PostService,
    topic::{TopicCounter, TopicService},
};
use log::error;

#[utoipa::path(
    get,
    path = "/api/topics/{id}",
    params(
        ("id" = i32, Path, description = "Topic ID")
    ),
    responses(
        (status = 200, description = "Topic found", body = TopicResponse),
        (status = 404, description = "Topic not found", body = MessageResponse)
    ),
    tag = "Topics"
)]
pub async fn get_topic(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<TopicResponse>> {
    let topic = TopicService::get_topic(&state.db, id).await?;

    Ok(Json(topic.into()))
}

/// Replies to a topic, oldest first; answers `[]` if the lookup fails
#[utoipa::path(
    get,
    path = "/api/topics/{id}/posts",
    params(
        ("id" = i32, Path, description = "Topic ID")
    ),
    responses(
        (status = 200, description = "Posts of the topic", body = Vec<PostResponse>)
    ),
    tag = "Topics"
)]
pub async fn get_posts(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Json<Vec<PostResponse>> {
    match PostService::get_posts_by_topic(&state.db, id).await {
        Ok(posts) => Json(posts.into_iter().map(PostResponse::from).collect()),
        Err(err) => {
            error!("Failed to list posts of topic {id}: {err}");
            Json(Vec::new())
        }
    }
}

/// Reply to a topic; the author is the configured placeholder user
#[utoipa::path(
    post,
    path = "/api/topics/{id}/posts",
    params(
        ("id" = i32, Path, description = "Topic ID")
    ),
    request_body = CreatePostRequest,
    responses(
        (status = 200, description = "Post created", body = MessageResponse),
        (status = 400, description = "Unknown topic or empty content", body = MessageResponse)
    ),
    tag = "Topics"
)]
pub async fn create_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<CreatePostRequest>,
) -> ApiResult<Json<MessageResponse>> {
    PostService::create_post(
        &state.db,
        id,
        request.into(),
        state.config.placeholder_author_id,
    )
    .await?;

    Ok(Json(MessageResponse::new("Post created successfully")))
}

#[utoipa::path(
    post,
    path = "/api/topics/posts/{post_id}/like",
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Like recorded", body = MessageResponse),
        (status = 404, description = "Post not found", body = MessageResponse)
    ),
    tag = "Topics"
)]
pub async fn like_post(
    State(state): State<AppState>,
    ApiPath(post_id): ApiPath<i32>,
) -> ApiResult<Json<MessageResponse>> {
    PostService::like_post(&state.db, post_id).await?;

    Ok(Json(MessageResponse::new("Post liked successfully")))
}

#[utoipa::path(
    post,
    path = "/api/topics/{id}/view",
    params(
        ("id" = i32, Path, description = "Topic ID")
    ),
    responses(
        (status = 200, description = "View recorded", body = MessageResponse),
        (status = 404, description = "Topic not found", body = MessageResponse)
    ),
    tag = "Topics"
)]
pub async fn view_topic(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<MessageResponse>> {
    TopicService::increment(&state.db, id, TopicCounter::Views).await?;

    Ok(Json(MessageResponse::new("Views incremented")))
}

#[utoipa::path(
    post,
    path = "/api/topics/{id}/like",
    params(
        ("id" = i32, Path, description = "Topic ID")
    ),
    responses(
        (status = 200, description = "Like recorded", body = MessageResponse),
        (status = 404, description = "Topic not found", body = MessageResponse)
    ),
    tag = "Topics"
)]
pub async fn like_topic(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<MessageResponse>> {
    TopicService::increment(&state.db, id, TopicCounter::Likes).await?;

    Ok(Json(MessageResponse::new("Topic liked successfully")))
}
