use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::{ports::AccountRepository, Account, DomainError};

pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn save(&self, account: &Account) -> Result<(), DomainError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|e| DomainError::internal(e.to_string()))?;

        accounts.insert(account.reference_id.clone(), account.clone());
        Ok(())
    }

    async fn find_by_reference_id(
        &self,
        reference_id: &str,
    ) -> Result<Option<Account>, DomainError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|e| DomainError::internal(e.to_string()))?;

        Ok(accounts.get(reference_id).cloned())
    }
}
