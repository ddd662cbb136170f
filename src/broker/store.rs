//! Token → session storage.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::SessionEntry;

/// Storage for issued sessions, keyed by bearer token.
///
/// The handlers only ever see this trait, so the in-process map below can be
/// swapped for a shared backend without touching them.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, token: &str) -> Option<SessionEntry>;
    async fn put(&self, token: String, entry: SessionEntry);
    async fn delete(&self, token: &str) -> bool;
    async fn count(&self) -> usize;
}

/// In-memory store. RwLock allows concurrent token resolution from the data
/// endpoints while serializing login inserts.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, SessionEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn get(&self, token: &str) -> Option<SessionEntry> {
        self.entries.read().await.get(token).cloned()
    }

    async fn put(&self, token: String, entry: SessionEntry) {
        self.entries.write().await.insert(token, entry);
    }

    async fn delete(&self, token: &str) -> bool {
        self.entries.write().await.remove(token).is_some()
    }

    async fn count(&self) -> usize {
        self.entries.read().await.len()
    }
}
