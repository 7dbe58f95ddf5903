//! # LINE Platform Integration
//!
//! Everything the relay needs from the messaging platform: webhook payload
//! types, signature verification for inbound deliveries, and the reply API
//! client for outbound messages.

// region: --- Modules
pub mod client;
pub mod signature;
pub mod types;
// endregion: --- Modules

pub use client::LineClient;
pub use types::{Event, MessageContent, WebhookRequest};
