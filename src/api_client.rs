use crate::domain::UserPayload;
use crate::utils::error_chain_fmt;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};

#[derive(thiserror::Error)]
pub enum ApiError {
    #[error("Failed to reach the create-user endpoint.")]
    Transport(#[from] reqwest::Error),
}

impl std::fmt::Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Client for the single create-user endpoint under test.
#[derive(Clone, Debug)]
pub struct UserApiClient {
    endpoint: String,
    http_client: Client,
    roll_number_header: String,
}

impl UserApiClient {
    pub fn new(
        endpoint: String,
        roll_number_header: String,
        timeout: Option<std::time::Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            endpoint,
            http_client: builder.build()?,
            roll_number_header,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `payload` and hand back whatever status the server answered with.
    ///
    /// The roll number header is only attached when `roll_number` is `Some`.
    /// Any status is a successful call here; only transport failures are errors.
    #[tracing::instrument(name = "Creating user", skip(self, payload))]
    pub async fn create_user(
        &self,
        payload: &UserPayload,
        roll_number: Option<&str>,
    ) -> Result<StatusCode, ApiError> {
        let mut request = self
            .http_client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(payload);
        if let Some(roll_number) = roll_number {
            request = request.header(self.roll_number_header.as_str(), roll_number);
        }
        let response = request.send().await.map_err(|e| {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to send create-user request"
            );
            e
        })?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Received create-user response");
        Ok(status)
    }
}
