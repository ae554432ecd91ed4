use database::entities::users;
use models::{Role, UserStatus};
use serde::Serialize;
use utoipa::ToSchema;

/// A user as the API exposes it; the password hash never leaves the server
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[schema(value_type = String, example = "STUDENT")]
    pub role: Role,
    #[schema(value_type = String, example = "ACTIVE")]
    pub status: UserStatus,
}

impl From<users::Model> for UserResponse {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            role: user.role,
            status: user.status,
        }
    }
}
