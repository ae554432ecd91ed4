/// Stamps `created_at`/`updated_at` the way every timestamped table expects:
/// `created_at` once on insert unless the caller already chose one,
/// `updated_at` on every save.
macro_rules! timestamped_behavior {
    () => {
        #[async_trait::async_trait]
        impl ActiveModelBehavior for ActiveModel {
            async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
            where
                C: ConnectionTrait,
            {
                let now = chrono::Utc::now().naive_utc();

                if insert && self.created_at.is_not_set() {
                    self.created_at = sea_orm::ActiveValue::Set(now);
                }
                if !insert || self.updated_at.is_not_set() {
                    self.updated_at = sea_orm::ActiveValue::Set(now);
                }

                Ok(self)
            }
        }
    };
}

pub(crate) use timestamped_behavior;

pub mod assignments;
pub mod courses;
pub mod forums;
pub mod posts;
pub mod submissions;
pub mod topics;
pub mod users;
