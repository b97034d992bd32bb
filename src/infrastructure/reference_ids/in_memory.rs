use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

use super::format_reference_id;
use crate::domain::{ports::ReferenceIdsManager, ApplicantInfo, DomainError};

/// Hands out ids from a process-local counter, starting at 1.
pub struct SequentialReferenceIdsManager {
    prefix: String,
    next: AtomicU64,
    fixed: Option<String>,
}

impl SequentialReferenceIdsManager {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
            fixed: None,
        }
    }

    /// Always returns `id`, still counting how many were issued.
    pub fn fixed(id: impl Into<String>) -> Self {
        Self {
            prefix: String::new(),
            next: AtomicU64::new(1),
            fixed: Some(id.into()),
        }
    }

    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::SeqCst) - 1
    }
}

#[async_trait]
impl ReferenceIdsManager for SequentialReferenceIdsManager {
    async fn obtain_id(&self, _applicant: &ApplicantInfo) -> Result<String, DomainError> {
        let sequence = self.next.fetch_add(1, Ordering::SeqCst);
        Ok(match &self.fixed {
            Some(id) => id.clone(),
            None => format_reference_id(&self.prefix, sequence),
        })
    }
}
