use async_trait::async_trait;
use reqwest::Response;

/// A response whose status was outside of the 2xx range, with its body drained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedResponse {
    pub status: u16,
    /// Raw body. Empty if it could not be read.
    pub body: String,
}

#[async_trait]
pub trait ResponseExt {
    /// Passes 2xx responses through and turns any other status into a [`FailedResponse`].
    async fn check_success(self) -> Result<Self, FailedResponse>
    where
        Self: Sized;
}

#[async_trait]
impl ResponseExt for Response {
    async fn check_success(self) -> Result<Self, FailedResponse> {
        let status = self.status();
        if status.is_success() {
            return Ok(self);
        }
        let body = match self.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("failed to read body of {} response: {}", status, e);
                String::new()
            }
        };
        Err(FailedResponse {
            status: status.as_u16(),
            body,
        })
    }
}
