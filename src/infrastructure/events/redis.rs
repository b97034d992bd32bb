use async_trait::async_trait;
use deadpool_redis::redis::AsyncCommands;
use tracing::instrument;

use crate::domain::{ports::AccountOpeningEventPublisher, AccountOpenedEvent, DomainError};
use crate::infrastructure::queue::{queues, RedisPool};

/// Pushes an `AccountOpenedEvent` onto the account-opened queue for the
/// worker to pick up.
pub struct RedisEventPublisher {
    pool: RedisPool,
}

impl RedisEventPublisher {
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountOpeningEventPublisher for RedisEventPublisher {
    #[instrument(skip(self))]
    async fn notify(&self, reference_id: &str) -> Result<(), DomainError> {
        let event = AccountOpenedEvent::new(reference_id);
        let payload =
            serde_json::to_string(&event).map_err(|e| DomainError::internal(e.to_string()))?;

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| DomainError::publish(e.to_string()))?;

        conn.lpush::<_, _, ()>(queues::ACCOUNT_OPENED_QUEUE, payload)
            .await
            .map_err(|e| DomainError::publish(e.to_string()))?;

        tracing::info!(event_id = %event.event_id, "account opened event queued");
        Ok(())
    }
}
