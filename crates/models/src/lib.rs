#[macro_use]
mod column;

pub mod course_code;
pub mod error;
pub mod names;
pub mod role;
pub mod submission_status;
pub mod user_status;

pub use error::ParseEnumError;
pub use role::Role;
pub use submission_status::SubmissionStatus;
pub use user_status::UserStatus;
