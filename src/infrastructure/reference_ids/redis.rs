use async_trait::async_trait;
use deadpool_redis::redis::AsyncCommands;
use tracing::instrument;

use super::format_reference_id;
use crate::domain::{ports::ReferenceIdsManager, ApplicantInfo, DomainError};
use crate::infrastructure::queue::{keys, RedisPool};

/// Allocates ids from a Redis counter so every API instance shares one
/// sequence.
pub struct RedisReferenceIdsManager {
    pool: RedisPool,
    prefix: String,
}

impl RedisReferenceIdsManager {
    pub fn new(pool: RedisPool, prefix: impl Into<String>) -> Self {
        Self {
            pool,
            prefix: prefix.into(),
        }
    }
}

#[async_trait]
impl ReferenceIdsManager for RedisReferenceIdsManager {
    #[instrument(skip_all)]
    async fn obtain_id(&self, _applicant: &ApplicantInfo) -> Result<String, DomainError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| DomainError::external(e.to_string()))?;

        let sequence: u64 = conn
            .incr(keys::REFERENCE_ID_SEQUENCE, 1)
            .await
            .map_err(|e| DomainError::external(e.to_string()))?;

        Ok(format_reference_id(&self.prefix, sequence))
    }
}
