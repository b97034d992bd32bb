mod in_memory;
mod redis;

pub use in_memory::RecordingEventPublisher;
pub use redis::RedisEventPublisher;
