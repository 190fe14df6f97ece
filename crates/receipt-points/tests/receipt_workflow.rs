//! Integration coverage for the receipt processing workflow, exercised
//! through the public service facade and the HTTP router only.

use std::sync::Arc;
use std::thread;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use receipt_points::receipts::{
    receipt_router, score, InMemoryScoreStore, Receipt, ReceiptId, ReceiptItem, ReceiptService,
    ReceiptServiceError, ScoreStore, StoreError,
};

fn item(description: &str, price: &str) -> ReceiptItem {
    ReceiptItem {
        short_description: description.to_string(),
        price: price.to_string(),
    }
}

fn simple_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![item("Mouse", "9.00")],
        total: "35.35".to_string(),
    }
}

fn afternoon_receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        items: vec![
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
        ],
        total: "9.00".to_string(),
    }
}

async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[test]
fn service_roundtrip_matches_the_rules_engine() {
    let store = Arc::new(InMemoryScoreStore::default());
    let service = ReceiptService::new(store);

    let receipt = afternoon_receipt();
    let expected = score(&receipt);
    assert_eq!(expected, 109);

    let id = service.process(receipt).expect("receipt processes");
    assert_eq!(service.points(&id).expect("score stored"), expected);
}

#[test]
fn rejected_receipts_expose_no_identifier() {
    let store = Arc::new(InMemoryScoreStore::default());
    let service = ReceiptService::new(store.clone());

    let mut receipt = simple_receipt();
    receipt.total = "35.3".to_string();

    match service.process(receipt) {
        Err(ReceiptServiceError::Validation(error)) => assert_eq!(error.field, "total"),
        other => panic!("expected validation error, got {other:?}"),
    }

    // The store backing the service still knows nothing.
    assert!(matches!(
        store.get(&ReceiptId("anything".to_string())),
        Err(StoreError::NotFound)
    ));
}

#[test]
fn concurrent_processing_keeps_every_score() {
    let store = Arc::new(InMemoryScoreStore::default());
    let service = Arc::new(ReceiptService::new(store));

    let expected = score(&afternoon_receipt());
    let mut ids = Vec::new();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = Arc::clone(&service);
                scope.spawn(move || {
                    (0..25)
                        .map(|_| service.process(afternoon_receipt()).expect("processes"))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            ids.extend(handle.join().expect("worker finishes"));
        }
    });

    assert_eq!(ids.len(), 200);
    let unique: std::collections::HashSet<_> = ids.iter().cloned().collect();
    assert_eq!(unique.len(), 200, "identifiers must never collide");

    for id in &ids {
        assert_eq!(service.points(id).expect("score kept"), expected);
    }
}

#[tokio::test]
async fn http_workflow_end_to_end() {
    let router = receipt_router(Arc::new(ReceiptService::new(Arc::new(
        InMemoryScoreStore::default(),
    ))));

    let response = router
        .clone()
        .oneshot(
            Request::post("/receipts/process")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&afternoon_receipt()).expect("serializes"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json(response).await;
    let id = payload
        .get("id")
        .and_then(|v| v.as_str())
        .expect("id returned")
        .to_string();

    let response = router
        .clone()
        .oneshot(
            Request::get(format!("/receipts/{id}/points"))
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    assert_eq!(payload.get("points").and_then(|v| v.as_u64()), Some(109));

    let response = router
        .oneshot(
            Request::get("/receipts/unknown/points")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
