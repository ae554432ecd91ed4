pub mod assignment;
pub mod auth;
pub mod course;
pub mod forum;
pub mod post;
pub mod seed;
pub mod submission;
pub mod topic;
pub mod user;

use crate::error::{Result, ServiceError};

/// Unwraps a field the caller had to send
fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| ServiceError::validation(format!("{field} is required")))
}

/// Like [`required`], but blank strings count as missing too
fn required_text(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ServiceError::validation(format!("{field} is required"))),
    }
}
