use super::required_text;
use crate::{
    entities::{posts, topics, users},
    error::{Result, ServiceError},
};
use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, sea_query::Expr,
};

#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub content: Option<String>,
}

/// A post together with its author's display name
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: posts::Model,
    pub author_name: String,
}

pub struct PostService;

impl PostService {
    /// Replies to a topic in the order they were written
    pub async fn get_posts_by_topic(
        db: &DatabaseConnection,
        topic_id: i32,
    ) -> Result<Vec<PostWithAuthor>> {
        let posts = posts::Entity::find()
            .filter(posts::Column::TopicId.eq(topic_id))
            .order_by_asc(posts::Column::CreatedAt)
            .order_by_asc(posts::Column::Id)
            .find_also_related(users::Entity)
            .all(db)
            .await?;

        Ok(posts
            .into_iter()
            .map(|(post, author)| PostWithAuthor {
                post,
                author_name: author.map(|a| a.display_name()).unwrap_or_default(),
            })
            .collect())
    }

    /// Reply to `topic_id` on behalf of `author_id`; nothing is written when
    /// the topic does not exist
    pub async fn create_post(
        db: &DatabaseConnection,
        topic_id: i32,
        post: NewPost,
        author_id: i32,
    ) -> Result<PostWithAuthor> {
        let content = required_text(post.content, "content")?;

        if topics::Entity::find_by_id(topic_id).one(db).await?.is_none() {
            return Err(ServiceError::validation("Topic not found"));
        }
        let author = users::Entity::find_by_id(author_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::validation("User not found"))?;

        let created = posts::ActiveModel {
            content: Set(content),
            topic_id: Set(topic_id),
            author_id: Set(author_id),
            likes_count: Set(0),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!("Created post {} in topic {}", created.id, topic_id);
        Ok(PostWithAuthor {
            post: created,
            author_name: author.display_name(),
        })
    }

    /// Add one like in a single `UPDATE`
    pub async fn like_post(db: &DatabaseConnection, id: i32) -> Result<()> {
        let result = posts::Entity::update_many()
            .col_expr(
                posts::Column::LikesCount,
                Expr::col(posts::Column::LikesCount).add(1),
            )
            .col_expr(posts::Column::UpdatedAt, Expr::value(Utc::now().naive_utc()))
            .filter(posts::Column::Id.eq(id))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("Post"));
        }

        Ok(())
    }
}
