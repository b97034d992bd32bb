use chrono::NaiveDate;
use std::io;
use std::sync::Arc;

use pension_setup::application::AccountOpeningService;
use pension_setup::domain::ports::{
    AccountOpeningEventPublisher, AccountRepository, BackgroundCheckService, ReferenceIdsManager,
};
use pension_setup::domain::{AccountOpeningStatus, DomainError};
use pension_setup::infrastructure::{
    FailingAccountRepository, FailingBackgroundCheckService, FailingEventPublisher,
    FailingReferenceIdsManager, InMemoryAccountRepository, RecordingEventPublisher,
    SequentialReferenceIdsManager, StaticBackgroundCheckService,
};

struct Harness {
    background_check: Arc<StaticBackgroundCheckService>,
    reference_ids: Arc<SequentialReferenceIdsManager>,
    accounts: Arc<InMemoryAccountRepository>,
    events: Arc<RecordingEventPublisher>,
}

impl Harness {
    fn new(background_check: StaticBackgroundCheckService) -> Self {
        Self {
            background_check: Arc::new(background_check),
            reference_ids: Arc::new(SequentialReferenceIdsManager::fixed("someId")),
            accounts: Arc::new(InMemoryAccountRepository::new()),
            events: Arc::new(RecordingEventPublisher::new()),
        }
    }

    fn service(&self) -> AccountOpeningService {
        AccountOpeningService::new(
            self.background_check.clone(),
            self.reference_ids.clone(),
            self.accounts.clone(),
            self.events.clone(),
        )
    }

    fn assert_nothing_after_check(&self) {
        assert_eq!(self.background_check.calls(), 1);
        assert_eq!(self.reference_ids.issued(), 0);
        assert!(self.accounts.is_empty());
        assert!(self.events.published().is_empty());
    }
}

fn birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
}

async fn open(service: &AccountOpeningService) -> Result<AccountOpeningStatus, DomainError> {
    service
        .open_account("John", "Smith", "123XYZ9", birth_date())
        .await
}

#[tokio::test]
async fn test_opens_account_for_acceptable_risk() {
    let harness = Harness::new(StaticBackgroundCheckService::returning("acceptable_risk", 50));

    let status = open(&harness.service()).await.unwrap();

    assert_eq!(status, AccountOpeningStatus::Opened);
    assert_eq!(harness.reference_ids.issued(), 1);
    assert_eq!(harness.events.published(), vec!["someId".to_string()]);

    let account = harness
        .accounts
        .find_by_reference_id("someId")
        .await
        .unwrap()
        .expect("account persisted");
    assert_eq!(account.applicant.first_name, "John");
    assert_eq!(account.applicant.identifying_code, "123XYZ9");
    assert_eq!(account.applicant.birth_date, birth_date());
}

#[tokio::test]
async fn test_declines_high_risk_profile() {
    let harness = Harness::new(StaticBackgroundCheckService::returning("High", 100));

    let status = open(&harness.service()).await.unwrap();

    assert_eq!(status, AccountOpeningStatus::Declined);
    harness.assert_nothing_after_check();
}

#[tokio::test]
async fn test_declines_when_no_results() {
    let harness = Harness::new(StaticBackgroundCheckService::absent());

    let status = open(&harness.service()).await.unwrap();

    assert_eq!(status, AccountOpeningStatus::Declined);
    harness.assert_nothing_after_check();
}

#[tokio::test]
async fn test_risk_label_match_ignores_case() {
    let harness = Harness::new(StaticBackgroundCheckService::returning("Something_ACCEPTABLE", 999));

    let status = open(&harness.service()).await.unwrap();

    assert_eq!(status, AccountOpeningStatus::Opened);
}

#[tokio::test]
async fn test_propagates_background_check_io_error() {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let events = Arc::new(RecordingEventPublisher::new());
    let service = AccountOpeningService::new(
        Arc::new(FailingBackgroundCheckService::new(io::ErrorKind::TimedOut)),
        Arc::new(SequentialReferenceIdsManager::new("PEN")),
        accounts.clone(),
        events.clone(),
    );

    let err = open(&service).await.unwrap_err();

    match err {
        DomainError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::TimedOut),
        other => panic!("expected I/O error, got {other:?}"),
    }
    assert!(accounts.is_empty());
    assert!(events.published().is_empty());
}

#[tokio::test]
async fn test_propagates_notification_error_without_rollback() {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let service = AccountOpeningService::new(
        Arc::new(StaticBackgroundCheckService::returning("something_acceptable", 50)),
        Arc::new(SequentialReferenceIdsManager::fixed("someId")),
        accounts.clone(),
        Arc::new(FailingEventPublisher),
    );

    let err = open(&service).await.unwrap_err();

    assert!(matches!(err, DomainError::Publish(_)));
    assert!(accounts
        .find_by_reference_id("someId")
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_storage_failure_skips_notification() {
    let events = Arc::new(RecordingEventPublisher::new());
    let service = AccountOpeningService::new(
        Arc::new(StaticBackgroundCheckService::returning("acceptable_risk", 50)),
        Arc::new(SequentialReferenceIdsManager::new("PEN")),
        Arc::new(FailingAccountRepository),
        events.clone(),
    );

    let err = open(&service).await.unwrap_err();

    assert!(matches!(err, DomainError::Storage(_)));
    assert!(events.published().is_empty());
}

#[tokio::test]
async fn test_reference_id_failure_stops_before_persisting() {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let events = Arc::new(RecordingEventPublisher::new());
    let service = AccountOpeningService::new(
        Arc::new(StaticBackgroundCheckService::returning("acceptable_risk", 50)),
        Arc::new(FailingReferenceIdsManager),
        accounts.clone(),
        events.clone(),
    );

    let err = open(&service).await.unwrap_err();

    assert!(matches!(err, DomainError::ExternalService(_)));
    assert!(accounts.is_empty());
    assert!(events.published().is_empty());
}

#[tokio::test]
async fn test_calls_are_independent() {
    let background_check = StaticBackgroundCheckService::returning("acceptable_risk", 50)
        .with_override("RISKY01", None);
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let events = Arc::new(RecordingEventPublisher::new());
    let service = Arc::new(AccountOpeningService::new(
        Arc::new(background_check),
        Arc::new(SequentialReferenceIdsManager::new("PEN")),
        accounts.clone(),
        events.clone(),
    ));

    let opened = {
        let service = service.clone();
        tokio::spawn(async move {
            service
                .open_account("Ann", "Lee", "OK00001", birth_date())
                .await
        })
    };
    let declined = {
        let service = service.clone();
        tokio::spawn(async move {
            service
                .open_account("Bob", "Ray", "RISKY01", birth_date())
                .await
        })
    };

    assert_eq!(opened.await.unwrap().unwrap(), AccountOpeningStatus::Opened);
    assert_eq!(declined.await.unwrap().unwrap(), AccountOpeningStatus::Declined);
    assert_eq!(accounts.len(), 1);
    assert_eq!(events.published(), vec!["PEN-0000000001".to_string()]);
}

#[test]
fn test_ports_are_object_safe() {
    fn assert_send_sync<T: Send + Sync + ?Sized>() {}
    assert_send_sync::<dyn BackgroundCheckService>();
    assert_send_sync::<dyn ReferenceIdsManager>();
    assert_send_sync::<dyn AccountRepository>();
    assert_send_sync::<dyn AccountOpeningEventPublisher>();
    assert_send_sync::<AccountOpeningService>();
}
