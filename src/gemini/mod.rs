//! # Gemini Generation Client
//!
//! Integration with the Google generative-language API. One request per
//! inbound message, no retries, no caching.

// region: --- Modules
pub mod client;
pub mod types;
// endregion: --- Modules

pub use client::{GeminiClient, GenerationError};
