use crate::error::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Where a submission is in the grading workflow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    #[default]
    Submitted,
    Graded,
    Late,
    Resubmitted,
}

impl SubmissionStatus {
    /// Submissions in these states still wait for a teacher
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Submitted | Self::Late | Self::Resubmitted)
    }
}

impl Display for SubmissionStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Submitted => write!(f, "SUBMITTED"),
            Self::Graded => write!(f, "GRADED"),
            Self::Late => write!(f, "LATE"),
            Self::Resubmitted => write!(f, "RESUBMITTED"),
        }
    }
}

impl FromStr for SubmissionStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SUBMITTED" => Ok(Self::Submitted),
            "GRADED" => Ok(Self::Graded),
            "LATE" => Ok(Self::Late),
            "RESUBMITTED" => Ok(Self::Resubmitted),
            _ => Err(ParseEnumError::new("submission status", s)),
        }
    }
}

string_column!(SubmissionStatus);
