use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::io;
use std::time::Duration;
use tracing::instrument;

use crate::domain::{
    ports::BackgroundCheckService, ApplicantInfo, BackgroundCheckResults, DomainError,
};
use crate::infrastructure::config::BackgroundCheckConfig;

const CHECKS_PATH: &str = "/v1/background-checks";

/// Background check client for a remote scoring service.
///
/// `200` carries the assessment, `404` means no assessment exists for the
/// applicant. Transport failures and `5xx` answers are reported as
/// `DomainError::Io` so callers can treat them as infrastructure failures.
pub struct HttpBackgroundCheckService {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct CheckRequest<'a> {
    first_name: &'a str,
    last_name: &'a str,
    identifying_code: &'a str,
    birth_date: chrono::NaiveDate,
}

impl<'a> From<&'a ApplicantInfo> for CheckRequest<'a> {
    fn from(applicant: &'a ApplicantInfo) -> Self {
        Self {
            first_name: &applicant.first_name,
            last_name: &applicant.last_name,
            identifying_code: &applicant.identifying_code,
            birth_date: applicant.birth_date,
        }
    }
}

impl HttpBackgroundCheckService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &BackgroundCheckConfig) -> Result<Self, DomainError> {
        Self::new(
            config.base_url.clone(),
            Duration::from_millis(config.timeout_ms),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CHECKS_PATH)
    }
}

fn transport_error(e: reqwest::Error) -> DomainError {
    let kind = if e.is_timeout() {
        io::ErrorKind::TimedOut
    } else if e.is_connect() {
        io::ErrorKind::ConnectionRefused
    } else {
        io::ErrorKind::Other
    };
    DomainError::Io(io::Error::new(kind, e))
}

#[async_trait]
impl BackgroundCheckService for HttpBackgroundCheckService {
    #[instrument(skip_all)]
    async fn confirm(
        &self,
        applicant: &ApplicantInfo,
    ) -> Result<Option<BackgroundCheckResults>, DomainError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(&CheckRequest::from(applicant))
            .send()
            .await
            .map_err(transport_error)?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            StatusCode::REQUEST_TIMEOUT => Err(DomainError::Io(io::Error::new(
                io::ErrorKind::TimedOut,
                "background check service timed out the request",
            ))),
            StatusCode::TOO_MANY_REQUESTS => Err(DomainError::Io(io::Error::new(
                io::ErrorKind::WouldBlock,
                "background check service is throttling requests",
            ))),
            status if status.is_server_error() => Err(DomainError::Io(io::Error::other(
                format!("background check service returned {status}"),
            ))),
            status if status.is_success() => response
                .json::<BackgroundCheckResults>()
                .await
                .map(Some)
                .map_err(|e| DomainError::external(format!("Invalid background check response: {e}"))),
            status => Err(DomainError::external(format!(
                "Unexpected background check status: {status}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn applicant() -> ApplicantInfo {
        ApplicantInfo::new(
            "John",
            "Smith",
            "123XYZ9",
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        )
    }

    fn service(server: &MockServer) -> HttpBackgroundCheckService {
        HttpBackgroundCheckService::new(server.uri(), Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn test_confirm_returns_results() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CHECKS_PATH))
            .and(body_partial_json(json!({
                "identifying_code": "123XYZ9",
                "birth_date": "1990-01-01"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "risk_profile": "acceptable_risk", "score": 50 })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let results = service(&server).confirm(&applicant()).await.unwrap();

        assert_eq!(results, Some(BackgroundCheckResults::new("acceptable_risk", 50)));
    }

    #[tokio::test]
    async fn test_not_found_is_absent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let results = service(&server).confirm(&applicant()).await.unwrap();

        assert!(results.is_none());
    }

    #[tokio::test]
    async fn test_server_error_is_io() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = service(&server).confirm(&applicant()).await.unwrap_err();

        assert!(matches!(err, DomainError::Io(_)));
    }

    #[tokio::test]
    async fn test_throttling_and_timeout_statuses_are_io() {
        for (code, kind) in [(429u16, io::ErrorKind::WouldBlock), (408, io::ErrorKind::TimedOut)] {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(code))
                .mount(&server)
                .await;

            let err = service(&server).confirm(&applicant()).await.unwrap_err();

            match err {
                DomainError::Io(e) => assert_eq!(e.kind(), kind, "status {code}"),
                other => panic!("status {code}: expected I/O error, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_client_error_is_external_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let err = service(&server).confirm(&applicant()).await.unwrap_err();

        assert!(matches!(err, DomainError::ExternalService(_)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_external_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = service(&server).confirm(&applicant()).await.unwrap_err();

        assert!(matches!(err, DomainError::ExternalService(_)));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_io() {
        let service =
            HttpBackgroundCheckService::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();

        let err = service.confirm(&applicant()).await.unwrap_err();

        assert!(matches!(err, DomainError::Io(_)));
    }
}
