use reqwest::{Client, Url};
use thiserror::Error;
use tracing::{debug, warn};

use super::endpoints::{GenerateRequest, GenerateResponse, Provider, GENERATE_PATH};

#[derive(Error, Debug)]
pub enum ApiConnectionError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("API error {status}: {error_body}")]
    ApiError {
        status: reqwest::StatusCode,
        error_body: String,
    },
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl Provider {
    pub fn ollama(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self::Ollama {
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        match self {
            Provider::Ollama { model, .. } => model,
        }
    }

    /// Full URL of the generate endpoint. Fails if the base URL is not an
    /// absolute http(s) URL.
    pub fn generate_url(&self) -> Result<String, ApiConnectionError> {
        match self {
            Provider::Ollama { base_url, .. } => {
                let parsed = Url::parse(base_url)
                    .map_err(|e| ApiConnectionError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
                if !matches!(parsed.scheme(), "http" | "https") {
                    return Err(ApiConnectionError::InvalidBaseUrl(format!(
                        "{base_url}: unsupported scheme '{}'",
                        parsed.scheme()
                    )));
                }
                Ok(format!("{}{}", base_url.trim_end_matches('/'), GENERATE_PATH))
            }
        }
    }

    /// Builds a non-streaming request for this provider's model.
    pub fn generate_request(&self, prompt: impl Into<String>) -> GenerateRequest {
        GenerateRequest {
            model: self.model().to_string(),
            prompt: prompt.into(),
            stream: false,
        }
    }

    /// Sends one generate request. There is no retry and no client-side
    /// timeout; the caller decides what a failure means.
    pub async fn call_generate(
        &self,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, ApiConnectionError> {
        let url = self.generate_url()?;
        debug!(%url, model = %request.model, "sending generate request");

        let client = Client::new();
        let response = client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            // Read the body as text first so a malformed payload surfaces as a
            // serialization error rather than a transport one
            let body = response.text().await?;
            let generated = serde_json::from_str::<GenerateResponse>(&body)?;
            debug!(%status, eval_count = ?generated.eval_count, "generate request succeeded");
            Ok(generated)
        } else {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            warn!(%status, "generate request rejected");
            Err(ApiConnectionError::ApiError { status, error_body })
        }
    }
}
