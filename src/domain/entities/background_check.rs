use serde::{Deserialize, Serialize};

const ACCEPTABLE_MARKER: &str = "acceptable";

/// Risk assessment returned by a background check: a qualitative label
/// paired with a numeric score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundCheckResults {
    pub risk_profile: String,
    pub score: i64,
}

impl BackgroundCheckResults {
    pub fn new(risk_profile: impl Into<String>, score: i64) -> Self {
        Self {
            risk_profile: risk_profile.into(),
            score,
        }
    }

    /// Classifies the label. Any label containing "acceptable", ignoring
    /// case, is acceptable. The score does not take part.
    pub fn risk_category(&self) -> RiskCategory {
        if self
            .risk_profile
            .to_lowercase()
            .contains(ACCEPTABLE_MARKER)
        {
            RiskCategory::Acceptable
        } else {
            RiskCategory::Unacceptable
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Acceptable,
    Unacceptable,
}

impl RiskCategory {
    pub fn is_acceptable(&self) -> bool {
        matches!(self, Self::Acceptable)
    }
}
