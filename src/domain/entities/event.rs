use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountOpenedEvent {
    pub event_id: Uuid,
    pub reference_id: String,
    pub occurred_at: DateTime<Utc>,
}

impl AccountOpenedEvent {
    pub fn new(reference_id: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            reference_id: reference_id.into(),
            occurred_at: Utc::now(),
        }
    }
}
