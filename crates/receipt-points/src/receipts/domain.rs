use serde::{Deserialize, Serialize};

/// Identifier wrapper handed back once a receipt has been scored and stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(pub String);

/// One line entry on a receipt.
///
/// The price stays a string on the wire and in the domain: the validator
/// enforces its `digits '.' two-digits` grammar and the rules engine
/// re-parses it defensively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptItem {
    pub short_description: String,
    pub price: String,
}

/// A submitted purchase receipt.
///
/// Receipts are immutable once submitted and live only for the duration of a
/// single processing call; only the computed score outlives them. Missing
/// fields deserialize to their defaults so the validator, not the JSON layer,
/// names the offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<ReceiptItem>,
    pub total: String,
}
