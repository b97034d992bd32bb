use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantInfo {
    pub first_name: String,
    pub last_name: String,
    pub identifying_code: String,
    pub birth_date: NaiveDate,
}

impl ApplicantInfo {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        identifying_code: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            identifying_code: identifying_code.into(),
            birth_date,
        }
    }
}
