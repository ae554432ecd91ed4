use super::{required, required_text};
use crate::{
    entities::{forums, posts, topics, users},
    error::{Result, ServiceError},
};
use chrono::Utc;
use futures::future::try_join_all;
use log::info;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, sea_query::Expr,
};

#[derive(Debug, Clone, Default)]
pub struct NewTopic {
    pub title: Option<String>,
    pub content: Option<String>,
    pub priority: Option<String>,
    pub forum_id: Option<i32>,
}

/// A topic as listed inside its forum
#[derive(Debug, Clone)]
pub struct TopicSummary {
    pub topic: topics::Model,
    pub author_name: String,
    pub post_count: u64,
}

/// A single topic with the names of its forum and author
#[derive(Debug, Clone)]
pub struct TopicDetails {
    pub topic: topics::Model,
    pub forum: forums::Model,
    pub author_name: String,
}

/// Which topic counter to bump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicCounter {
    Views,
    Likes,
}

impl TopicCounter {
    fn column(self) -> topics::Column {
        match self {
            Self::Views => topics::Column::Views,
            Self::Likes => topics::Column::LikesCount,
        }
    }
}

pub struct TopicService;

impl TopicService {
    /// Topics of a forum, oldest first, each with its author's name and post count
    pub async fn get_topics_by_forum(
        db: &DatabaseConnection,
        forum_id: i32,
    ) -> Result<Vec<TopicSummary>> {
        let topics = topics::Entity::find()
            .filter(topics::Column::ForumId.eq(forum_id))
            .order_by_asc(topics::Column::CreatedAt)
            .order_by_asc(topics::Column::Id)
            .find_also_related(users::Entity)
            .all(db)
            .await?;

        let post_counts = try_join_all(topics.iter().map(|(topic, _)| {
            posts::Entity::find()
                .filter(posts::Column::TopicId.eq(topic.id))
                .count(db)
        }))
        .await?;

        Ok(topics
            .into_iter()
            .zip(post_counts)
            .map(|((topic, author), post_count)| TopicSummary {
                topic,
                author_name: author.map(|a| a.display_name()).unwrap_or_default(),
                post_count,
            })
            .collect())
    }

    pub async fn get_topic(db: &DatabaseConnection, id: i32) -> Result<TopicDetails> {
        let topic = topics::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("Topic"))?;

        let forum = topic
            .find_related(forums::Entity)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("Forum"))?;
        let author = topic.find_related(users::Entity).one(db).await?;

        Ok(TopicDetails {
            author_name: author.map(|a| a.display_name()).unwrap_or_default(),
            topic,
            forum,
        })
    }

    /// Open a topic in a forum on behalf of `author_id`
    pub async fn create_topic(
        db: &DatabaseConnection,
        topic: NewTopic,
        author_id: i32,
    ) -> Result<topics::Model> {
        let title = required_text(topic.title, "title")?;
        let content = required_text(topic.content, "content")?;
        let priority = required_text(topic.priority, "priority")?;
        let forum_id = required(topic.forum_id, "forumId")?;

        if forums::Entity::find_by_id(forum_id).one(db).await?.is_none() {
            return Err(ServiceError::validation("Forum not found"));
        }
        if users::Entity::find_by_id(author_id).one(db).await?.is_none() {
            return Err(ServiceError::validation("User not found"));
        }

        let created = topics::ActiveModel {
            title: Set(title),
            content: Set(content),
            priority: Set(priority),
            forum_id: Set(forum_id),
            author_id: Set(author_id),
            views: Set(0),
            likes_count: Set(0),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!("Created topic {} in forum {}", created.id, forum_id);
        Ok(created)
    }

    /// Add one to a counter in a single `UPDATE`, so concurrent calls never
    /// lose an increment
    pub async fn increment(db: &DatabaseConnection, id: i32, counter: TopicCounter) -> Result<()> {
        let column = counter.column();

        let result = topics::Entity::update_many()
            .col_expr(column, Expr::col(column).add(1))
            .col_expr(
                topics::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(topics::Column::Id.eq(id))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("Topic"));
        }

        Ok(())
    }
}
