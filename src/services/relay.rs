//! # Relay Service
//!
//! The per-message pipeline: generate a reply, record the exchange, deliver
//! the reply. Generation failures degrade to the fallback reply string and
//! delivery failures are logged and swallowed, so the pipeline itself never
//! fails — the webhook endpoint answers 200 either way.

use crate::gemini::GeminiClient;
use crate::history::{Exchange, HistoryStore};
use crate::line::LineClient;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Service for relaying one inbound text message to the generation provider
/// and back to the originating chat.
pub struct RelayService {
    gemini: Arc<GeminiClient>,
    line: Arc<LineClient>,
    history: Arc<HistoryStore>,
}

impl RelayService {
    pub fn new(
        gemini: Arc<GeminiClient>,
        line: Arc<LineClient>,
        history: Arc<HistoryStore>,
    ) -> Self {
        Self {
            gemini,
            line,
            history,
        }
    }

    /// Run the full pipeline for one text message.
    ///
    /// The exchange is recorded before the reply delivery is attempted, so
    /// the history reflects every handled message even when the platform
    /// rejects the reply token.
    pub async fn handle_text_message(&self, reply_token: &str, text: &str) {
        let reply = match self.gemini.generate(text).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("[RELAY] generation degraded to fallback reply: {}", e);
                e.user_reply()
            }
        };

        self.history
            .append(Exchange {
                user: text.to_string(),
                bot: reply.clone(),
            })
            .await;

        if let Err(e) = self.line.reply(reply_token, &reply).await {
            error!("[RELAY] failed to deliver reply: {}", e);
        } else {
            info!("[RELAY] reply delivered ({} chars)", reply.len());
        }
    }
}
