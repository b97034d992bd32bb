//! Application layer - Use cases and orchestration.
//!
//! Services here depend on domain ports (traits) rather than concrete
//! adapters, so the same orchestration runs against Redis and HTTP in
//! production and against in-memory doubles in tests.

pub mod services;

pub use services::AccountOpeningService;
