//! Receipt intake, points scoring, and score storage.

pub mod domain;
pub(crate) mod money;
pub mod router;
pub mod scoring;
pub mod service;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{Receipt, ReceiptId, ReceiptItem};
pub use router::receipt_router;
pub use scoring::{score, score_breakdown, RuleContribution, ScoreBreakdown};
pub use service::{ReceiptService, ReceiptServiceError};
pub use store::{InMemoryScoreStore, ScoreStore, StoreError};
pub use validation::{validate, ValidationError};
