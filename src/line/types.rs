//! Webhook payload and reply API wire types.
//!
//! Inbound events are modeled as tagged enums dispatched with an explicit
//! match. Event and message types the relay does not act on all collapse
//! into the `Other` variants.

use serde::{Deserialize, Serialize};

/// Body of one webhook delivery: a batch of events for the bot.
#[derive(Debug, Deserialize)]
pub struct WebhookRequest {
    #[serde(default)]
    pub destination: Option<String>,
    pub events: Vec<Event>,
}

/// One webhook event, discriminated by its `type` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event {
    #[serde(rename_all = "camelCase")]
    Message {
        reply_token: String,
        message: MessageContent,
    },
    /// Follow, unfollow, join, postback and every other event type the
    /// relay ignores.
    #[serde(other)]
    Other,
}

/// Content of a message event, discriminated by its `type` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MessageContent {
    Text { text: String },
    /// Stickers, images, audio and other non-text content.
    #[serde(other)]
    Other,
}

/// Body of a reply API call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest {
    pub reply_token: String,
    pub messages: Vec<OutgoingMessage>,
}

/// Outbound message payload. The relay only ever sends text.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OutgoingMessage {
    Text { text: String },
}

impl ReplyRequest {
    pub fn text(reply_token: &str, text: &str) -> Self {
        Self {
            reply_token: reply_token.to_string(),
            messages: vec![OutgoingMessage::Text {
                text: text.to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_decodes_text_message_event() {
        let body = r#"{
            "destination": "U0123456789abcdef0123456789abcdef",
            "events": [{
                "type": "message",
                "mode": "active",
                "timestamp": 1625665242211,
                "source": { "type": "user", "userId": "U80696558e1aa831a87" },
                "webhookEventId": "01FZ74A0TDDPYRVKNK77XKC3ZR",
                "deliveryContext": { "isRedelivery": false },
                "replyToken": "757913772c4646b784d4b7ce46d12671",
                "message": {
                    "id": "325708",
                    "type": "text",
                    "quoteToken": "q3Plxr4AgKd",
                    "text": "hello"
                }
            }]
        }"#;

        let request: WebhookRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.events.len(), 1);

        match &request.events[0] {
            Event::Message {
                reply_token,
                message: MessageContent::Text { text },
            } => {
                assert_eq!(reply_token, "757913772c4646b784d4b7ce46d12671");
                assert_eq!(text, "hello");
            }
            other => panic!("expected text message event, got {:?}", other),
        }
    }

    #[test]
    fn test_webhook_routes_unknown_events_to_other() {
        let body = r#"{
            "events": [
                { "type": "follow", "replyToken": "abc", "source": { "type": "user" } },
                { "type": "unsend", "unsend": { "messageId": "325708" } }
            ]
        }"#;

        let request: WebhookRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.events.len(), 2);
        assert!(matches!(request.events[0], Event::Other));
        assert!(matches!(request.events[1], Event::Other));
    }

    #[test]
    fn test_webhook_routes_non_text_message_to_other_content() {
        let body = r#"{
            "events": [{
                "type": "message",
                "replyToken": "757913772c4646b784d4b7ce46d12671",
                "message": { "id": "325709", "type": "sticker", "packageId": "446", "stickerId": "1988" }
            }]
        }"#;

        let request: WebhookRequest = serde_json::from_str(body).unwrap();
        match &request.events[0] {
            Event::Message { message, .. } => assert!(matches!(message, MessageContent::Other)),
            other => panic!("expected message event, got {:?}", other),
        }
    }

    #[test]
    fn test_webhook_decodes_empty_event_batch() {
        let request: WebhookRequest = serde_json::from_str(r#"{"events":[]}"#).unwrap();
        assert!(request.events.is_empty());
        assert!(request.destination.is_none());
    }

    #[test]
    fn test_reply_request_serializes_to_platform_shape() {
        let request = ReplyRequest::text("757913772c4646b784d4b7ce46d12671", "hi there");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "replyToken": "757913772c4646b784d4b7ce46d12671",
                "messages": [{ "type": "text", "text": "hi there" }]
            })
        );
    }
}
