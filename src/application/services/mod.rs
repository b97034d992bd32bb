mod account_opening;

pub use account_opening::AccountOpeningService;
