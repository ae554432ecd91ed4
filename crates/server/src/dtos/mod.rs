pub mod assignment;
pub mod auth;
pub mod course;
pub mod forum;
pub mod submission;
pub mod user;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error and of endpoints with nothing else to say
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
