use chrono::NaiveDateTime;
use database::{
    entities::forums,
    services::{
        forum::NewForum,
        post::{NewPost, PostWithAuthor},
        topic::{NewTopic, TopicDetails, TopicSummary},
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForumResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub topic_count: u64,
}

impl From<(forums::Model, u64)> for ForumResponse {
    fn from((forum, topic_count): (forums::Model, u64)) -> Self {
        Self {
            id: forum.id,
            name: forum.name,
            description: forum.description,
            topic_count,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateForumRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<CreateForumRequest> for NewForum {
    fn from(request: CreateForumRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
        }
    }
}

/// A freshly created forum, before it has any topics
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedForumResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: NaiveDateTime,
}

impl From<forums::Model> for CreatedForumResponse {
    fn from(forum: forums::Model) -> Self {
        Self {
            id: forum.id,
            name: forum.name,
            description: forum.description,
            created_at: forum.created_at,
        }
    }
}

/// Topic as shown in its forum's listing
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicSummaryResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author_name: String,
    pub created_at: NaiveDateTime,
    pub post_count: u64,
    pub views: i32,
}

impl From<TopicSummary> for TopicSummaryResponse {
    fn from(summary: TopicSummary) -> Self {
        Self {
            id: summary.topic.id,
            title: summary.topic.title,
            content: summary.topic.content,
            author_name: summary.author_name,
            created_at: summary.topic.created_at,
            post_count: summary.post_count,
            views: summary.topic.views,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub priority: String,
    pub author_name: String,
    pub created_at: NaiveDateTime,
    pub forum_id: i32,
    pub forum_name: String,
    pub views: i32,
    pub likes_count: i32,
}

impl From<TopicDetails> for TopicResponse {
    fn from(details: TopicDetails) -> Self {
        Self {
            id: details.topic.id,
            title: details.topic.title,
            content: details.topic.content,
            priority: details.topic.priority,
            author_name: details.author_name,
            created_at: details.topic.created_at,
            forum_id: details.forum.id,
            forum_name: details.forum.name,
            views: details.topic.views,
            likes_count: details.topic.likes_count,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopicRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub priority: Option<String>,
    pub forum_id: Option<i32>,
}

impl From<CreateTopicRequest> for NewTopic {
    fn from(request: CreateTopicRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
            priority: request.priority,
            forum_id: request.forum_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i32,
    pub content: String,
    pub author_name: String,
    pub created_at: NaiveDateTime,
    pub likes: i32,
    /// Always false: likes are not tracked per user
    pub is_liked: bool,
}

impl From<PostWithAuthor> for PostResponse {
    fn from(entry: PostWithAuthor) -> Self {
        Self {
            id: entry.post.id,
            content: entry.post.content,
            author_name: entry.author_name,
            created_at: entry.post.created_at,
            likes: entry.post.likes_count,
            is_liked: false,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub content: Option<String>,
}

impl From<CreatePostRequest> for NewPost {
    fn from(request: CreatePostRequest) -> Self {
        Self {
            content: request.content,
        }
    }
}
