use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

use crate::services::http::{FailedResponse, ResponseExt};

/// Path of the registration endpoint, relative to the API base url.
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";

/// Shown when the endpoint gave no usable reason or could not be reached.
pub const FALLBACK_ERROR_MESSAGE: &str =
    "An error occurred during registration. Please try again.";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "companyName")]
    pub company_name: String,
}

impl std::fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("company_name", &self.company_name)
            .finish()
    }
}

/// The endpoint accepted the registration. Any 2xx status, whatever the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationAccepted {
    pub status: u16,
}

/// Body of a rejected registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RejectionBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl RejectionBody {
    /// Bodies that are not JSON or do not follow the expected shape carry no reason.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("registration rejected with status {status}")]
    Rejected { status: u16, body: RejectionBody },
    #[error("registration request failed: {0}")]
    Transport(String),
}

impl RegistrationError {
    /// Message to show to the user: the endpoint's own reason if any, the generic fallback
    /// otherwise.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected {
                body:
                    RejectionBody {
                        error: Some(reason),
                    },
                ..
            } if !reason.is_empty() => reason.as_str(),
            _ => FALLBACK_ERROR_MESSAGE,
        }
    }
}

impl From<reqwest::Error> for RegistrationError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.to_string())
    }
}

impl From<FailedResponse> for RegistrationError {
    fn from(response: FailedResponse) -> Self {
        Self::Rejected {
            status: response.status,
            body: RejectionBody::parse(&response.body),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegistrationClient {
    http: reqwest::Client,
    base_url: String,
}

impl RegistrationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build http client, using defaults: {}", e);
                reqwest::Client::new()
            });
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationAccepted, RegistrationError> {
        let url = self.url(REGISTER_ENDPOINT);
        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?
            .check_success()
            .await?;

        Ok(RegistrationAccepted {
            status: response.status().as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn request() -> RegistrationRequest {
        RegistrationRequest {
            name: "John Doe".to_string(),
            email: "john@acme.com".to_string(),
            password: "hunter22".to_string(),
            company_name: "Acme Inc.".to_string(),
        }
    }

    #[test]
    fn request_wire_format() {
        assert_eq!(
            serde_json::to_value(request()).unwrap(),
            json!({
                "name": "John Doe",
                "email": "john@acme.com",
                "password": "hunter22",
                "companyName": "Acme Inc.",
            })
        );
    }

    #[test]
    fn request_debug_hides_password() {
        let debug = format!("{:?}", request());
        assert!(!debug.contains("hunter22"));
        assert!(debug.contains("john@acme.com"));
    }

    #[test]
    fn rejection_body_is_lenient() {
        assert_eq!(
            RejectionBody::parse(r#"{"error":"Email already exists"}"#).error,
            Some("Email already exists".to_string())
        );
        assert_eq!(RejectionBody::parse("{}"), RejectionBody::default());
        assert_eq!(RejectionBody::parse("<html>502</html>"), RejectionBody::default());
        assert_eq!(RejectionBody::parse(r#"{"error":42}"#), RejectionBody::default());
        assert_eq!(RejectionBody::parse(""), RejectionBody::default());
    }

    #[test]
    fn user_message_prefers_endpoint_reason() {
        let rejected = |error: Option<&str>| RegistrationError::Rejected {
            status: 400,
            body: RejectionBody {
                error: error.map(str::to_string),
            },
        };
        assert_eq!(
            rejected(Some("Email already exists")).user_message(),
            "Email already exists"
        );
        assert_eq!(rejected(None).user_message(), FALLBACK_ERROR_MESSAGE);
        assert_eq!(rejected(Some("")).user_message(), FALLBACK_ERROR_MESSAGE);
        assert_eq!(
            RegistrationError::Transport("connection refused".to_string()).user_message(),
            FALLBACK_ERROR_MESSAGE
        );
    }

    #[test]
    fn base_url_trailing_slash_is_ignored() {
        let client = RegistrationClient::new("http://localhost:3000/");
        assert_eq!(
            client.url(REGISTER_ENDPOINT),
            "http://localhost:3000/api/auth/register"
        );
    }

    #[tokio::test]
    async fn register_posts_json_payload() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(REGISTER_ENDPOINT)
                    .header("content-type", "application/json")
                    .json_body(json!({
                        "name": "John Doe",
                        "email": "john@acme.com",
                        "password": "hunter22",
                        "companyName": "Acme Inc.",
                    }));
                then.status(201)
                    .header("content-type", "application/json")
                    .json_body(json!({ "id": 1 }));
            })
            .await;

        let client = RegistrationClient::new(server.base_url());
        let accepted = client.register(&request()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(accepted, RegistrationAccepted { status: 201 });
    }

    #[tokio::test]
    async fn register_success_needs_no_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(REGISTER_ENDPOINT);
                then.status(200);
            })
            .await;

        let client = RegistrationClient::new(server.base_url());
        assert_eq!(
            client.register(&request()).await,
            Ok(RegistrationAccepted { status: 200 })
        );
    }

    #[tokio::test]
    async fn register_status_decides_even_with_error_field() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(REGISTER_ENDPOINT);
                then.status(200).json_body(json!({ "error": "ignored" }));
            })
            .await;

        let client = RegistrationClient::new(server.base_url());
        assert!(client.register(&request()).await.is_ok());
    }

    #[tokio::test]
    async fn register_rejected_with_reason() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(REGISTER_ENDPOINT);
                then.status(409)
                    .header("content-type", "application/json")
                    .json_body(json!({ "error": "Email already exists" }));
            })
            .await;

        let client = RegistrationClient::new(server.base_url());
        let error = client.register(&request()).await.unwrap_err();
        assert_eq!(
            error,
            RegistrationError::Rejected {
                status: 409,
                body: RejectionBody {
                    error: Some("Email already exists".to_string()),
                },
            }
        );
        assert_eq!(error.user_message(), "Email already exists");
    }

    #[tokio::test]
    async fn register_rejected_without_reason() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(REGISTER_ENDPOINT);
                then.status(400).json_body(json!({}));
            })
            .await;

        let client = RegistrationClient::new(server.base_url());
        let error = client.register(&request()).await.unwrap_err();
        assert!(matches!(error, RegistrationError::Rejected { status: 400, .. }));
        assert_eq!(error.user_message(), FALLBACK_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn register_rejected_with_html_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(REGISTER_ENDPOINT);
                then.status(502).body("<html>Bad Gateway</html>");
            })
            .await;

        let client = RegistrationClient::new(server.base_url());
        let error = client.register(&request()).await.unwrap_err();
        assert_eq!(error.user_message(), FALLBACK_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn register_unreachable_endpoint() {
        // Grab a free port and release it so nothing listens there.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let client = RegistrationClient::new(format!("http://127.0.0.1:{}", port));
        let error = client.register(&request()).await.unwrap_err();
        assert!(matches!(error, RegistrationError::Transport(_)));
        assert_eq!(error.user_message(), FALLBACK_ERROR_MESSAGE);
    }
}
