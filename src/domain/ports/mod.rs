mod account_repository;
mod background_check;
mod event_publisher;
mod reference_ids;

pub use account_repository::AccountRepository;
pub use background_check::BackgroundCheckService;
pub use event_publisher::AccountOpeningEventPublisher;
pub use reference_ids::ReferenceIdsManager;
