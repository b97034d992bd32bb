use deadpool_redis::{Config, Pool, Runtime};

use crate::domain::AccountOpenedEvent;

pub type RedisPool = Pool;

pub mod queues {
    pub const ACCOUNT_OPENED_QUEUE: &str = "events:account_opened";
}

pub mod keys {
    use uuid::Uuid;

    pub const REFERENCE_ID_SEQUENCE: &str = "reference_id:sequence";

    pub fn account(reference_id: &str) -> String {
        format!("account:{}", reference_id)
    }

    pub fn event_delivered(event_id: &Uuid) -> String {
        format!("event:delivered:{}", event_id)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("Redis pool error: {0}")]
    Pool(String),
}

pub fn create_pool(redis_url: &str) -> Result<RedisPool, QueueError> {
    let cfg = Config::from_url(redis_url);
    cfg.create_pool(Some(Runtime::Tokio1))
        .map_err(|e| QueueError::Pool(e.to_string()))
}

/// Decodes a queued account-opened payload. Undecodable payloads are logged
/// and yield `None` so the consumer can drop them.
pub fn decode_event(payload: &str) -> Option<AccountOpenedEvent> {
    match serde_json::from_str(payload) {
        Ok(event) => Some(event),
        Err(e) => {
            tracing::warn!(error = %e, "skipping undecodable event");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_key_layout() {
        assert_eq!(keys::account("PEN-0000000001"), "account:PEN-0000000001");

        let id = Uuid::nil();
        assert_eq!(
            keys::event_delivered(&id),
            "event:delivered:00000000-0000-0000-0000-000000000000"
        );
    }

    #[tokio::test]
    async fn test_create_pool_is_lazy() {
        // Pools connect on first checkout, so no server is needed here.
        assert!(create_pool("redis://localhost:6379").is_ok());
    }

    #[test]
    fn test_decode_event() {
        let event = AccountOpenedEvent::new("PEN-0000000001");
        let payload = serde_json::to_string(&event).unwrap();

        let decoded = decode_event(&payload).unwrap();

        assert_eq!(decoded.event_id, event.event_id);
        assert_eq!(decoded.reference_id, "PEN-0000000001");
        assert_eq!(decoded.occurred_at, event.occurred_at);
    }

    #[test]
    fn test_decode_event_skips_garbage() {
        assert!(decode_event("not json").is_none());
        assert!(decode_event(r#"{"reference_id":"PEN-0000000001"}"#).is_none());
        assert!(decode_event("").is_none());
    }
}
