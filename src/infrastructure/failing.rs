//! Collaborators that always fail, for exercising error propagation.

use async_trait::async_trait;
use std::io;

use crate::domain::{
    ports::{
        AccountOpeningEventPublisher, AccountRepository, BackgroundCheckService,
        ReferenceIdsManager,
    },
    Account, ApplicantInfo, BackgroundCheckResults, DomainError,
};

pub struct FailingBackgroundCheckService {
    kind: io::ErrorKind,
}

impl FailingBackgroundCheckService {
    pub fn new(kind: io::ErrorKind) -> Self {
        Self { kind }
    }
}

impl Default for FailingBackgroundCheckService {
    fn default() -> Self {
        Self::new(io::ErrorKind::ConnectionRefused)
    }
}

#[async_trait]
impl BackgroundCheckService for FailingBackgroundCheckService {
    async fn confirm(
        &self,
        _applicant: &ApplicantInfo,
    ) -> Result<Option<BackgroundCheckResults>, DomainError> {
        Err(DomainError::Io(io::Error::new(
            self.kind,
            "background check service unavailable",
        )))
    }
}

#[derive(Default)]
pub struct FailingReferenceIdsManager;

#[async_trait]
impl ReferenceIdsManager for FailingReferenceIdsManager {
    async fn obtain_id(&self, _applicant: &ApplicantInfo) -> Result<String, DomainError> {
        Err(DomainError::external("reference id service unavailable"))
    }
}

#[derive(Default)]
pub struct FailingAccountRepository;

#[async_trait]
impl AccountRepository for FailingAccountRepository {
    async fn save(&self, _account: &Account) -> Result<(), DomainError> {
        Err(DomainError::storage("account store unavailable"))
    }

    async fn find_by_reference_id(
        &self,
        _reference_id: &str,
    ) -> Result<Option<Account>, DomainError> {
        Err(DomainError::storage("account store unavailable"))
    }
}

#[derive(Default)]
pub struct FailingEventPublisher;

#[async_trait]
impl AccountOpeningEventPublisher for FailingEventPublisher {
    async fn notify(&self, _reference_id: &str) -> Result<(), DomainError> {
        Err(DomainError::publish("event bus rejected notification"))
    }
}
