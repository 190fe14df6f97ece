use std::sync::Arc;

use uuid::Uuid;

use super::domain::{Receipt, ReceiptId};
use super::scoring;
use super::store::{ScoreStore, StoreError};
use super::validation::{self, ValidationError};

/// Service composing the validator, rules engine, and score store.
pub struct ReceiptService<S> {
    store: Arc<S>,
}

fn next_receipt_id() -> ReceiptId {
    ReceiptId(Uuid::new_v4().to_string())
}

impl<S> ReceiptService<S>
where
    S: ScoreStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Validate and score a receipt, returning the id its score was stored
    /// under.
    ///
    /// When validation rejects the receipt, nothing is persisted and no id is
    /// exposed. When the store fails, the freshly generated id is discarded
    /// with it.
    pub fn process(&self, receipt: Receipt) -> Result<ReceiptId, ReceiptServiceError> {
        validation::validate(&receipt)?;

        let points = scoring::score(&receipt);
        let id = next_receipt_id();
        self.store.put(id.clone(), points)?;

        Ok(id)
    }

    /// Look up the stored score for a previously processed receipt.
    pub fn points(&self, id: &ReceiptId) -> Result<u64, ReceiptServiceError> {
        Ok(self.store.get(id)?)
    }
}

/// Error raised by the receipt service; the boundary switches on the variant.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
