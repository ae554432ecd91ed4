use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Error returned when a stored or submitted string names no known variant
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl Display for ParseEnumError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Unknown {}: {}", self.kind, self.value)
    }
}

impl std::error::Error for ParseEnumError {}
