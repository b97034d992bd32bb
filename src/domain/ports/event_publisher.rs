use async_trait::async_trait;

use crate::domain::errors::DomainError;

#[async_trait]
pub trait AccountOpeningEventPublisher: Send + Sync {
    async fn notify(&self, reference_id: &str) -> Result<(), DomainError>;
}
