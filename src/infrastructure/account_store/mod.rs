mod in_memory;
mod redis;

pub use in_memory::InMemoryAccountRepository;
pub use redis::RedisAccountRepository;
