use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domain::{
    ports::{
        AccountOpeningEventPublisher, AccountRepository, BackgroundCheckService,
        ReferenceIdsManager,
    },
    Account, AccountOpeningStatus, ApplicantInfo, DomainError,
};

/// Decides whether a pension account is opened and, when it is, records and
/// announces it.
///
/// Declines are returned as values. Any collaborator error is returned
/// unchanged and stops the attempt where it happened: nothing already
/// persisted is rolled back.
pub struct AccountOpeningService {
    background_check: Arc<dyn BackgroundCheckService>,
    reference_ids: Arc<dyn ReferenceIdsManager>,
    accounts: Arc<dyn AccountRepository>,
    events: Arc<dyn AccountOpeningEventPublisher>,
}

impl AccountOpeningService {
    pub fn new(
        background_check: Arc<dyn BackgroundCheckService>,
        reference_ids: Arc<dyn ReferenceIdsManager>,
        accounts: Arc<dyn AccountRepository>,
        events: Arc<dyn AccountOpeningEventPublisher>,
    ) -> Self {
        Self {
            background_check,
            reference_ids,
            accounts,
            events,
        }
    }

    pub async fn open_account(
        &self,
        first_name: &str,
        last_name: &str,
        identifying_code: &str,
        birth_date: NaiveDate,
    ) -> Result<AccountOpeningStatus, DomainError> {
        let applicant = ApplicantInfo::new(first_name, last_name, identifying_code, birth_date);
        self.open(&applicant).await
    }

    #[instrument(skip_all)]
    pub async fn open(&self, applicant: &ApplicantInfo) -> Result<AccountOpeningStatus, DomainError> {
        let Some(results) = self.background_check.confirm(applicant).await? else {
            info!("no background check results, declining");
            return Ok(AccountOpeningStatus::Declined);
        };

        if !results.risk_category().is_acceptable() {
            info!(risk_profile = %results.risk_profile, "risk profile not acceptable, declining");
            return Ok(AccountOpeningStatus::Declined);
        }

        let reference_id = self.reference_ids.obtain_id(applicant).await?;
        let account = Account::new(reference_id, applicant.clone());
        self.accounts.save(&account).await?;

        if let Err(e) = self.events.notify(&account.reference_id).await {
            warn!(
                reference_id = %account.reference_id,
                error = %e,
                "account persisted but opening notification failed"
            );
            return Err(e);
        }

        info!(reference_id = %account.reference_id, "account opened");
        Ok(AccountOpeningStatus::Opened)
    }
}
