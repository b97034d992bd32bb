use async_trait::async_trait;

use crate::domain::{errors::DomainError, ApplicantInfo, BackgroundCheckResults};

#[async_trait]
pub trait BackgroundCheckService: Send + Sync {
    /// Returns `Ok(None)` when no assessment can be obtained for the applicant.
    /// Infrastructure failures surface as `DomainError::Io`.
    async fn confirm(
        &self,
        applicant: &ApplicantInfo,
    ) -> Result<Option<BackgroundCheckResults>, DomainError>;
}
