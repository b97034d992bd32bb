use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Connection};
use tracing::instrument;

use crate::domain::{ports::AccountRepository, Account, DomainError};
use crate::infrastructure::queue::{keys, RedisPool};

/// Stores each account as JSON under `account:{reference_id}`.
pub struct RedisAccountRepository {
    pool: RedisPool,
}

impl RedisAccountRepository {
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    async fn conn(&self) -> Result<Connection, DomainError> {
        self.pool
            .get()
            .await
            .map_err(|e| DomainError::storage(e.to_string()))
    }
}

#[async_trait]
impl AccountRepository for RedisAccountRepository {
    #[instrument(skip(self, account), fields(reference_id = %account.reference_id))]
    async fn save(&self, account: &Account) -> Result<(), DomainError> {
        let json =
            serde_json::to_string(account).map_err(|e| DomainError::internal(e.to_string()))?;

        let mut conn = self.conn().await?;
        conn.set::<_, _, ()>(keys::account(&account.reference_id), json)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))
    }

    #[instrument(skip(self))]
    async fn find_by_reference_id(
        &self,
        reference_id: &str,
    ) -> Result<Option<Account>, DomainError> {
        let mut conn = self.conn().await?;
        let json: Option<String> = conn
            .get(keys::account(reference_id))
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        json.map(|json| {
            serde_json::from_str(&json).map_err(|e| DomainError::storage(e.to_string()))
        })
        .transpose()
    }
}
