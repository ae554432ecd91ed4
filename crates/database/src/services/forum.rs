use super::required_text;
use crate::{
    entities::{forums, topics},
    error::Result,
};
use futures::future::try_join_all;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

#[derive(Debug, Clone, Default)]
pub struct NewForum {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub struct ForumService;

impl ForumService {
    /// Every forum with the number of topics it holds
    pub async fn get_forums_with_topic_count(
        db: &DatabaseConnection,
    ) -> Result<Vec<(forums::Model, u64)>> {
        let forums = forums::Entity::find()
            .order_by_asc(forums::Column::Id)
            .all(db)
            .await?;

        let counts = try_join_all(forums.iter().map(|forum| {
            topics::Entity::find()
                .filter(topics::Column::ForumId.eq(forum.id))
                .count(db)
        }))
        .await?;

        Ok(forums.into_iter().zip(counts).collect())
    }

    pub async fn create_forum(db: &DatabaseConnection, forum: NewForum) -> Result<forums::Model> {
        let name = required_text(forum.name, "name")?;
        let description = required_text(forum.description, "description")?;

        Ok(forums::ActiveModel {
            name: Set(name),
            description: Set(description),
            ..Default::default()
        }
        .insert(db)
        .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ServiceError,
        test_support::{create_forum, create_topic, create_user, setup_db},
    };
    use models::Role;

    #[tokio::test]
    async fn counts_topics_per_forum() {
        let db = setup_db().await;
        let author = create_user(&db, "etudiant@campus.fr", Role::Student).await;
        let busy = create_forum(&db, "Architecture Logicielle").await;
        let quiet = create_forum(&db, "Data Science").await;
        create_topic(&db, busy.id, author.id).await;
        create_topic(&db, busy.id, author.id).await;

        let forums = ForumService::get_forums_with_topic_count(&db).await.unwrap();

        assert_eq!(forums.len(), 2);
        assert_eq!(forums[0].0.id, busy.id);
        assert_eq!(forums[0].1, 2);
        assert_eq!(forums[1].0.id, quiet.id);
        assert_eq!(forums[1].1, 0);
    }

    #[tokio::test]
    async fn create_requires_name_and_description() {
        let db = setup_db().await;

        let err = ForumService::create_forum(
            &db,
            NewForum {
                name: Some("IA".to_string()),
                description: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let forum = ForumService::create_forum(
            &db,
            NewForum {
                name: Some("IA".to_string()),
                description: Some("Machine Learning".to_string()),
            },
        )
        .await
        .unwrap();
        assert_eq!(forum.name, "IA");
    }
}
