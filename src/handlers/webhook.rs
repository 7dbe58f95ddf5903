//! # Webhook Handler
//!
//! HTTP endpoint for inbound platform events.
//!
//! ## Endpoint
//!
//! - `POST /callback` - Signed webhook deliveries from the messaging platform
//!
//! The signature is checked against the raw body before anything else
//! happens; only a verified body is decoded and dispatched. Every verified
//! delivery is answered `200 OK` regardless of how the relay pipeline fared,
//! so the platform never retries a message we already processed.

use crate::config::Config;
use crate::line::signature;
use crate::line::{Event, MessageContent, WebhookRequest};
use crate::services::RelayService;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use std::sync::Arc;
use tracing::{info, warn};

const SIGNATURE_HEADER: &str = "x-line-signature";

/// Receive one webhook delivery.
///
/// **Route**: `POST /callback`
///
/// # Returns
///
/// - 200 `OK` - Signature verified; all text-message events were relayed
///   (possibly with degraded replies).
/// - 400 - Missing/invalid signature, or a verified body that does not
///   decode as a webhook payload.
pub async fn callback(
    State(config): State<Config>,
    State(relay): State<Arc<RelayService>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, &'static str) {
    let signature_header = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());

    if let Err(e) = signature::verify(&config.channel_secret, body.as_bytes(), signature_header) {
        warn!("[WEBHOOK] delivery rejected: {}", e);
        return (StatusCode::BAD_REQUEST, "invalid signature");
    }

    let request: WebhookRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("[WEBHOOK] verified body did not decode: {}", e);
            return (StatusCode::BAD_REQUEST, "invalid payload");
        }
    };

    for event in request.events {
        match event {
            Event::Message {
                reply_token,
                message: MessageContent::Text { text },
            } => {
                info!("[WEBHOOK] text message received ({} chars)", text.len());
                relay.handle_text_message(&reply_token, &text).await;
            }
            // Non-text messages and every other event type are ignored.
            Event::Message { .. } | Event::Other => {}
        }
    }

    (StatusCode::OK, "OK")
}
