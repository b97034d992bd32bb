use async_trait::async_trait;

use crate::domain::{errors::DomainError, ApplicantInfo};

#[async_trait]
pub trait ReferenceIdsManager: Send + Sync {
    async fn obtain_id(&self, applicant: &ApplicantInfo) -> Result<String, DomainError>;
}
