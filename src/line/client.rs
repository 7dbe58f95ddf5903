//! # LINE Reply Client
//!
//! Sends the generated reply back through the platform's reply API using
//! the one-time reply token from the originating event.

use super::types::ReplyRequest;
use crate::error::{AppError, Result};
use reqwest::Client;
use tracing::debug;

const DEFAULT_API_BASE: &str = "https://api.line.me";

pub struct LineClient {
    http: Client,
    api_base: String,
    channel_access_token: String,
}

impl LineClient {
    /// Create a client against the production endpoint.
    pub fn new(channel_access_token: String) -> anyhow::Result<Self> {
        Self::with_api_base(channel_access_token, DEFAULT_API_BASE.to_string())
    }

    /// Create a client against a custom base URL.
    pub fn with_api_base(
        channel_access_token: String,
        api_base: String,
    ) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            api_base,
            channel_access_token,
        })
    }

    /// Send one text reply for the given reply token.
    pub async fn reply(&self, reply_token: &str, text: &str) -> Result<()> {
        let url = format!("{}/v2/bot/message/reply", self.api_base);
        let payload = ReplyRequest::text(reply_token, text);

        debug!("[LINE] sending reply ({} chars)", text.len());

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.channel_access_token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::ReplyApi(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ReplyApi(format!("status {}: {}", status, body)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reply_posts_token_and_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v2/bot/message/reply")
            .match_header("authorization", "Bearer test-token")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "replyToken": "757913772c4646b784d4b7ce46d12671",
                "messages": [{ "type": "text", "text": "hi there" }]
            })))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client =
            LineClient::with_api_base("test-token".to_string(), server.url()).unwrap();
        client
            .reply("757913772c4646b784d4b7ce46d12671", "hi there")
            .await
            .expect("reply should succeed");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_reply_surfaces_api_rejection() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v2/bot/message/reply")
            .with_status(400)
            .with_body(r#"{"message":"Invalid reply token"}"#)
            .create_async()
            .await;

        let client =
            LineClient::with_api_base("test-token".to_string(), server.url()).unwrap();
        let err = client.reply("expired-token", "hi there").await.unwrap_err();

        match err {
            AppError::ReplyApi(message) => {
                assert!(message.contains("400"));
                assert!(message.contains("Invalid reply token"));
            }
            other => panic!("expected reply API error, got {:?}", other),
        }
    }
}
