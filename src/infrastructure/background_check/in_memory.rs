use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{
    ports::BackgroundCheckService, ApplicantInfo, BackgroundCheckResults, DomainError,
};

/// Answers every check with a fixed assessment, optionally overridden per
/// identifying code. Counts calls so tests can assert on sequencing.
pub struct StaticBackgroundCheckService {
    default: Option<BackgroundCheckResults>,
    overrides: HashMap<String, Option<BackgroundCheckResults>>,
    calls: AtomicUsize,
}

impl StaticBackgroundCheckService {
    pub fn new(default: Option<BackgroundCheckResults>) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn returning(risk_profile: impl Into<String>, score: i64) -> Self {
        Self::new(Some(BackgroundCheckResults::new(risk_profile, score)))
    }

    pub fn absent() -> Self {
        Self::new(None)
    }

    pub fn with_override(
        mut self,
        identifying_code: impl Into<String>,
        results: Option<BackgroundCheckResults>,
    ) -> Self {
        self.overrides.insert(identifying_code.into(), results);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BackgroundCheckService for StaticBackgroundCheckService {
    async fn confirm(
        &self,
        applicant: &ApplicantInfo,
    ) -> Result<Option<BackgroundCheckResults>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .overrides
            .get(&applicant.identifying_code)
            .unwrap_or(&self.default)
            .clone())
    }
}
