//! # Gemini HTTP Client
//!
//! Sends one generateContent request per call and extracts the reply text.
//! Every failure mode maps to a user-facing fallback string via
//! [`GenerationError::user_reply`]; callers that want the fail-soft contract
//! of the relay never see an error escape past that mapping.

use super::types::{GenerateContentRequest, GenerateContentResponse};
use reqwest::Client;
use thiserror::Error;
use tracing::error;

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

/// Failure modes of a generation call.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Transport failure before any HTTP status existed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("API returned status {status}")]
    Status { status: u16, body: String },

    /// Success status but the body did not carry the expected fields.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl GenerationError {
    /// Map every failure kind to the apologetic reply relayed to the chat
    /// user. The status variant embeds the numeric code; the other kinds
    /// have no status to report.
    pub fn user_reply(&self) -> String {
        match self {
            GenerationError::Status { status, .. } => {
                format!("API 錯誤（{}），請稍後再試", status)
            }
            GenerationError::Request(_) => "API 錯誤（無法連線），請稍後再試".to_string(),
            GenerationError::Malformed(_) => "API 錯誤（回應格式異常），請稍後再試".to_string(),
        }
    }
}

/// HTTP client for the generative-language API.
pub struct GeminiClient {
    http: Client,
    api_base: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a client against the production endpoint.
    pub fn new(api_key: String) -> anyhow::Result<Self> {
        Self::with_api_base(api_key, DEFAULT_API_BASE.to_string())
    }

    /// Create a client against a custom base URL.
    pub fn with_api_base(api_key: String, api_base: String) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            api_base,
            api_key,
        })
    }

    /// Generate a reply for one user input.
    ///
    /// Sends the input wrapped in the provider's request shape, with the API
    /// key as a query credential, and parses the first candidate's first
    /// part as the reply text.
    pub async fn generate(&self, input: &str) -> Result<String, GenerationError> {
        let url = format!("{}{}", self.api_base, GENERATE_PATH);
        let payload = GenerateContentRequest::from_input(input);

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("[GEMINI] API error status: {}", status);
            error!("[GEMINI] response body: {}", body);
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Malformed(e.to_string()))?;

        body.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| {
                error!("[GEMINI] response carried no candidate text");
                GenerationError::Malformed("no candidate text in response".to_string())
            })
    }
}
