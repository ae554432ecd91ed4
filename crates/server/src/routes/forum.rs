use crate::{
    dtos::{
        MessageResponse,
        forum::{
            CreateForumRequest, CreateTopicRequest, CreatedForumResponse, ForumResponse,
            PostResponse, TopicResponse, TopicSummaryResponse,
        },
    },
    error::ApiResult,
    extract::{ApiJson, ApiPath},
    routes::topic,
    state::AppState,
};
use axum::{Json, extract::State};
use database::services::{forum::ForumService, topic::TopicService};
use log::error;

/// Every forum with its number of topics; answers `[]` if the lookup fails
#[utoipa::path(
    get,
    path = "/api/forums",
    responses(
        (status = 200, description = "List of forums", body = Vec<ForumResponse>)
    ),
    tag = "Forums"
)]
pub async fn get_forums(State(state): State<AppState>) -> Json<Vec<ForumResponse>> {
    match ForumService::get_forums_with_topic_count(&state.db).await {
        Ok(forums) => Json(forums.into_iter().map(ForumResponse::from).collect()),
        Err(err) => {
            error!("Failed to list forums: {err}");
            Json(Vec::new())
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/forums",
    request_body = CreateForumRequest,
    responses(
        (status = 200, description = "Forum created", body = CreatedForumResponse),
        (status = 400, description = "Missing name or description", body = MessageResponse)
    ),
    tag = "Forums"
)]
pub async fn create_forum(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateForumRequest>,
) -> ApiResult<Json<CreatedForumResponse>> {
    let forum = ForumService::create_forum(&state.db, request.into()).await?;

    Ok(Json(forum.into()))
}

/// Topics of a forum with author and post count; answers `[]` if the lookup fails
#[utoipa::path(
    get,
    path = "/api/forums/{id}/topics",
    params(
        ("id" = i32, Path, description = "Forum ID")
    ),
    responses(
        (status = 200, description = "Topics of the forum", body = Vec<TopicSummaryResponse>)
    ),
    tag = "Forums"
)]
pub async fn get_topics_by_forum(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Json<Vec<TopicSummaryResponse>> {
    match TopicService::get_topics_by_forum(&state.db, id).await {
        Ok(topics) => Json(topics.into_iter().map(TopicSummaryResponse::from).collect()),
        Err(err) => {
            error!("Failed to list topics of forum {id}: {err}");
            Json(Vec::new())
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/forums/topics/{id}",
    params(
        ("id" = i32, Path, description = "Topic ID")
    ),
    responses(
        (status = 200, description = "Topic found", body = TopicResponse),
        (status = 404, description = "Topic not found", body = MessageResponse)
    ),
    tag = "Forums"
)]
pub async fn get_forum_topic(
    state: State<AppState>,
    id: ApiPath<i32>,
) -> ApiResult<Json<TopicResponse>> {
    topic::get_topic(state, id).await
}

#[utoipa::path(
    get,
    path = "/api/forums/topics/{id}/posts",
    params(
        ("id" = i32, Path, description = "Topic ID")
    ),
    responses(
        (status = 200, description = "Posts of the topic, oldest first", body = Vec<PostResponse>)
    ),
    tag = "Forums"
)]
pub async fn get_forum_topic_posts(
    state: State<AppState>,
    id: ApiPath<i32>,
) -> Json<Vec<PostResponse>> {
    topic::get_posts(state, id).await
}

/// Open a topic; the author is the configured placeholder user
#[utoipa::path(
    post,
    path = "/api/forums/topics",
    request_body = CreateTopicRequest,
    responses(
        (status = 200, description = "Topic created", body = MessageResponse),
        (status = 400, description = "Missing field or unknown forum", body = MessageResponse)
    ),
    tag = "Forums"
)]
pub async fn create_topic(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateTopicRequest>,
) -> ApiResult<Json<MessageResponse>> {
    TopicService::create_topic(
        &state.db,
        request.into(),
        state.config.placeholder_author_id,
    )
    .await?;

    Ok(Json(MessageResponse::new("Topic created successfully")))
}
