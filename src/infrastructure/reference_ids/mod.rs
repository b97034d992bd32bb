mod in_memory;
mod redis;

pub use in_memory::SequentialReferenceIdsManager;
pub use redis::RedisReferenceIdsManager;

/// Formats a sequence number as `{prefix}-{sequence:010}`.
pub fn format_reference_id(prefix: &str, sequence: u64) -> String {
    format!("{}-{:010}", prefix, sequence)
}
