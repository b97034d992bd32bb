mod account;
mod applicant;
mod background_check;
mod event;

pub use account::{Account, AccountOpeningStatus};
pub use applicant::ApplicantInfo;
pub use background_check::{BackgroundCheckResults, RiskCategory};
pub use event::AccountOpenedEvent;
