//! # History Handlers
//!
//! REST surface over the in-memory history store.
//!
//! ## Endpoints
//!
//! - `GET /history` - Full dump of recorded exchanges
//! - `DELETE /history` - Clear the store
//!
//! Both endpoints are public; the store they share is the same one the
//! webhook pipeline appends to.

use crate::history::{Exchange, HistoryStore};
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

const CLEARED_MESSAGE: &str = "歷史對話已清除";

/// Confirmation body for a successful clear.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClearResponse {
    pub message: String,
}

/// Dump all recorded exchanges.
///
/// **Route**: `GET /history`
///
/// # Returns
///
/// Success (200): JSON array of `{user, bot}` objects in insertion order.
/// An empty store yields `[]`.
pub async fn get_history(
    State(history): State<Arc<HistoryStore>>,
) -> (StatusCode, Json<Vec<Exchange>>) {
    let exchanges = history.snapshot().await;
    info!("[HISTORY] returning {} exchanges", exchanges.len());
    (StatusCode::OK, Json(exchanges))
}

/// Clear the history store.
///
/// **Route**: `DELETE /history`
///
/// # Returns
///
/// Success (200): JSON confirmation object. A following `GET /history`
/// returns `[]`.
pub async fn delete_history(
    State(history): State<Arc<HistoryStore>>,
) -> (StatusCode, Json<ClearResponse>) {
    history.clear().await;
    info!("[HISTORY] store cleared");
    (
        StatusCode::OK,
        Json(ClearResponse {
            message: CLEARED_MESSAGE.to_string(),
        }),
    )
}
