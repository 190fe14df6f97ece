use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::receipts::domain::{Receipt, ReceiptId, ReceiptItem};
use crate::receipts::router::receipt_router;
use crate::receipts::service::ReceiptService;
use crate::receipts::store::{InMemoryScoreStore, ScoreStore, StoreError};

pub(super) fn item(description: &str, price: &str) -> ReceiptItem {
    ReceiptItem {
        short_description: description.to_string(),
        price: price.to_string(),
    }
}

pub(super) fn receipt(
    retailer: &str,
    date: &str,
    time: &str,
    total: &str,
    items: Vec<ReceiptItem>,
) -> Receipt {
    Receipt {
        retailer: retailer.to_string(),
        purchase_date: date.to_string(),
        purchase_time: time.to_string(),
        items,
        total: total.to_string(),
    }
}

/// Single-item morning receipt: 6 retailer characters + 6 for the odd day.
pub(super) fn target_receipt() -> Receipt {
    receipt(
        "Target",
        "2022-01-01",
        "13:01",
        "35.35",
        vec![item("Mouse", "9.00")],
    )
}

/// Two-item afternoon receipt exercising the retailer, pair, description,
/// and time-window rules at once.
pub(super) fn corner_market_receipt() -> Receipt {
    receipt(
        "M&M Corner Market",
        "2022-03-20",
        "14:33",
        "6.49",
        vec![
            item("Emils Cheese Pizza", "3.25"),
            item("Knorr Creamy Chicken", "1.26"),
        ],
    )
}

/// Four identical items with a round total, in the 14:00 window.
pub(super) fn gatorade_receipt() -> Receipt {
    receipt(
        "M&M Corner Market",
        "2022-03-20",
        "14:33",
        "9.00",
        vec![
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
        ],
    )
}

pub(super) fn build_service() -> (ReceiptService<InMemoryScoreStore>, Arc<InMemoryScoreStore>) {
    let store = Arc::new(InMemoryScoreStore::default());
    let service = ReceiptService::new(store.clone());
    (service, store)
}

pub(super) fn router_with_store<S: ScoreStore + 'static>(store: Arc<S>) -> axum::Router {
    receipt_router(Arc::new(ReceiptService::new(store)))
}

/// Store double recording every write so tests can assert nothing persisted.
#[derive(Default)]
pub(super) struct RecordingStore {
    pub(super) writes: Mutex<Vec<(ReceiptId, u64)>>,
}

impl ScoreStore for RecordingStore {
    fn put(&self, id: ReceiptId, points: u64) -> Result<(), StoreError> {
        self.writes
            .lock()
            .expect("writes mutex poisoned")
            .push((id, points));
        Ok(())
    }

    fn get(&self, _id: &ReceiptId) -> Result<u64, StoreError> {
        Err(StoreError::NotFound)
    }
}

/// Store double standing in for an offline backend.
pub(super) struct UnavailableStore;

impl ScoreStore for UnavailableStore {
    fn put(&self, _id: ReceiptId, _points: u64) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("backend offline".to_string()))
    }

    fn get(&self, _id: &ReceiptId) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("backend offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
