use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ApplicantInfo;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub reference_id: String,
    pub applicant: ApplicantInfo,
    pub opened_at: DateTime<Utc>,
}

impl Account {
    pub fn new(reference_id: impl Into<String>, applicant: ApplicantInfo) -> Self {
        Self {
            reference_id: reference_id.into(),
            applicant,
            opened_at: Utc::now(),
        }
    }
}

/// Outcome of a single account opening attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountOpeningStatus {
    Opened,
    Declined,
}

impl AccountOpeningStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Opened => "OPENED",
            Self::Declined => "DECLINED",
        }
    }
}

impl fmt::Display for AccountOpeningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
