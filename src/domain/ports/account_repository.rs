use async_trait::async_trait;

use crate::domain::{errors::DomainError, Account};

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn save(&self, account: &Account) -> Result<(), DomainError>;
    async fn find_by_reference_id(&self, reference_id: &str)
        -> Result<Option<Account>, DomainError>;
}
