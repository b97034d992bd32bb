pub mod account_store;
pub mod background_check;
pub mod config;
pub mod events;
pub mod failing;
pub mod queue;
pub mod reference_ids;

pub use account_store::{InMemoryAccountRepository, RedisAccountRepository};
pub use background_check::{HttpBackgroundCheckService, StaticBackgroundCheckService};
pub use config::{Config, ConfigError};
pub use events::{RecordingEventPublisher, RedisEventPublisher};
pub use failing::{
    FailingAccountRepository, FailingBackgroundCheckService, FailingEventPublisher,
    FailingReferenceIdsManager,
};
pub use queue::{create_pool, decode_event, keys, queues, QueueError, RedisPool};
pub use reference_ids::{RedisReferenceIdsManager, SequentialReferenceIdsManager};
