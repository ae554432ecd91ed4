use crate::{entities::users, error::Result};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

pub struct UserService;

impl UserService {
    pub async fn get_all_users(db: &DatabaseConnection) -> Result<Vec<users::Model>> {
        Ok(users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn get_user_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<users::Model>> {
        Ok(users::Entity::find_by_id(id).one(db).await?)
    }
}
