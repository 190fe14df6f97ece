use std::collections::HashMap;
use std::sync::RwLock;

use super::domain::ReceiptId;

/// Storage abstraction so the service facade can be exercised in isolation.
pub trait ScoreStore: Send + Sync {
    /// Associate `points` with `id`. Overwriting an existing id is permitted;
    /// the service only ever writes each id once.
    fn put(&self, id: ReceiptId, points: u64) -> Result<(), StoreError>;
    /// Look up the stored points for `id`.
    fn get(&self, id: &ReceiptId) -> Result<u64, StoreError>;
}

/// Error enumeration for score store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no score recorded for that receipt")]
    NotFound,
    #[error("score store unavailable: {0}")]
    Unavailable(String),
}

/// Process-lifetime score map behind a readers-writer lock: many concurrent
/// readers, one writer at a time, read-after-write visibility.
#[derive(Default)]
pub struct InMemoryScoreStore {
    scores: RwLock<HashMap<ReceiptId, u64>>,
}

impl ScoreStore for InMemoryScoreStore {
    fn put(&self, id: ReceiptId, points: u64) -> Result<(), StoreError> {
        let mut guard = self
            .scores
            .write()
            .map_err(|_| StoreError::Unavailable("score lock poisoned".to_string()))?;
        guard.insert(id, points);
        Ok(())
    }

    fn get(&self, id: &ReceiptId) -> Result<u64, StoreError> {
        let guard = self
            .scores
            .read()
            .map_err(|_| StoreError::Unavailable("score lock poisoned".to_string()))?;
        guard.get(id).copied().ok_or(StoreError::NotFound)
    }
}
