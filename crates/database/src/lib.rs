pub mod db;
pub mod entities;
pub mod error;
pub mod password;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;
