use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::domain::{Account, AccountOpeningStatus, DomainError};

#[derive(Debug, Deserialize)]
pub struct OpenAccountRequest {
    pub first_name: String,
    pub last_name: String,
    pub identifying_code: String,
    pub birth_date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct OpenAccountResponse {
    pub status: AccountOpeningStatus,
}

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub reference_id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub opened_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            reference_id: account.reference_id,
            first_name: account.applicant.first_name,
            last_name: account.applicant.last_name,
            birth_date: account.applicant.birth_date,
            opened_at: account.opened_at,
        }
    }
}

fn error_status(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Io(_) | DomainError::ExternalService(_) | DomainError::Publish(_) => {
            StatusCode::BAD_GATEWAY
        }
        DomainError::Storage(_) | DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub async fn open_account(
    State(state): State<AppState>,
    Json(request): Json<OpenAccountRequest>,
) -> Result<(StatusCode, Json<OpenAccountResponse>), StatusCode> {
    let result = state
        .account_service
        .open_account(
            &request.first_name,
            &request.last_name,
            &request.identifying_code,
            request.birth_date,
        )
        .await;

    match result {
        Ok(status) => {
            let code = match status {
                AccountOpeningStatus::Opened => StatusCode::CREATED,
                AccountOpeningStatus::Declined => StatusCode::OK,
            };
            Ok((code, Json(OpenAccountResponse { status })))
        }
        Err(e) => {
            tracing::error!(error = %e, "Account opening failed");
            Err(error_status(&e))
        }
    }
}

pub async fn get_account(
    State(state): State<AppState>,
    Path(reference_id): Path<String>,
) -> Result<Json<AccountResponse>, StatusCode> {
    match state.accounts.find_by_reference_id(&reference_id).await {
        Ok(Some(account)) => Ok(Json(AccountResponse::from(account))),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!(error = %e, "Failed to get account");
            Err(error_status(&e))
        }
    }
}
