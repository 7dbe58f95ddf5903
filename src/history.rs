//! # History Store
//!
//! Process-lifetime record of user/bot exchanges. The store is append-only
//! apart from a full clear, and every access goes through the lock so
//! concurrent webhook deliveries cannot race a clear.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// One user-message/bot-reply pair, recorded after a relay completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub user: String,
    pub bot: String,
}

/// In-memory store of exchanges in arrival order.
///
/// Not persisted; contents live exactly as long as the process.
#[derive(Debug, Default)]
pub struct HistoryStore {
    exchanges: RwLock<Vec<Exchange>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self {
            exchanges: RwLock::new(Vec::new()),
        }
    }

    /// Append one exchange at the end of the log.
    pub async fn append(&self, exchange: Exchange) {
        self.exchanges.write().await.push(exchange);
    }

    /// Copy of the full log in insertion order.
    pub async fn snapshot(&self) -> Vec<Exchange> {
        self.exchanges.read().await.clone()
    }

    /// Drop every recorded exchange.
    pub async fn clear(&self) {
        self.exchanges.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.exchanges.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.exchanges.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exchange(user: &str, bot: &str) -> Exchange {
        Exchange {
            user: user.to_string(),
            bot: bot.to_string(),
        }
    }

    #[tokio::test]
    async fn test_append_preserves_insertion_order() {
        let store = HistoryStore::new();

        store.append(exchange("first", "reply one")).await;
        store.append(exchange("second", "reply two")).await;
        store.append(exchange("third", "reply three")).await;

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0].user, "first");
        assert_eq!(snapshot[1].user, "second");
        assert_eq!(snapshot[2].user, "third");
    }

    #[tokio::test]
    async fn test_clear_empties_store() {
        let store = HistoryStore::new();

        store.append(exchange("hello", "hi there")).await;
        assert_eq!(store.len().await, 1);

        store.clear().await;

        assert!(store.is_empty().await);
        assert_eq!(store.snapshot().await, Vec::new());
    }

    #[tokio::test]
    async fn test_snapshot_is_a_copy() {
        let store = HistoryStore::new();
        store.append(exchange("hello", "hi there")).await;

        let snapshot = store.snapshot().await;
        store.clear().await;

        // The earlier snapshot is unaffected by the clear.
        assert_eq!(snapshot.len(), 1);
        assert!(store.is_empty().await);
    }

    #[test]
    fn test_exchange_serializes_as_user_bot_object() {
        let json = serde_json::to_value(exchange("hello", "hi there")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "user": "hello", "bot": "hi there" })
        );
    }
}
