use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::{ports::AccountOpeningEventPublisher, DomainError};

/// Keeps every notified reference id in order.
pub struct RecordingEventPublisher {
    published: RwLock<Vec<String>>,
}

impl RecordingEventPublisher {
    pub fn new() -> Self {
        Self {
            published: RwLock::new(Vec::new()),
        }
    }

    pub fn published(&self) -> Vec<String> {
        self.published.read().expect("lock poisoned").clone()
    }
}

impl Default for RecordingEventPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountOpeningEventPublisher for RecordingEventPublisher {
    async fn notify(&self, reference_id: &str) -> Result<(), DomainError> {
        self.published
            .write()
            .map_err(|e| DomainError::internal(e.to_string()))?
            .push(reference_id.to_string());
        Ok(())
    }
}
