use chrono::{NaiveDate, NaiveTime};

use super::domain::{Receipt, ReceiptItem};
use super::money;

/// Rejection of a malformed receipt, naming the offending field.
///
/// Always recoverable by resubmitting corrected input; never treated as a
/// system fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Check a receipt field by field, reporting the first violation.
///
/// The order is fixed: retailer, purchase date, purchase time, item count,
/// each item in sequence, then the total.
pub fn validate(receipt: &Receipt) -> Result<(), ValidationError> {
    if receipt.retailer.trim().is_empty() {
        return Err(ValidationError::new("retailer", "retailer is required"));
    }

    check_purchase_date(&receipt.purchase_date)
        .map_err(|message| ValidationError::new("purchaseDate", message))?;
    check_purchase_time(&receipt.purchase_time)
        .map_err(|message| ValidationError::new("purchaseTime", message))?;

    if receipt.items.is_empty() {
        return Err(ValidationError::new("items", "at least one item is required"));
    }
    for (index, item) in receipt.items.iter().enumerate() {
        check_item(item, index)?;
    }

    if receipt.total.is_empty() {
        return Err(ValidationError::new("total", "total is required"));
    }
    if money::parse_cents(&receipt.total).is_none() {
        return Err(ValidationError::new(
            "total",
            "total must be a dollars-and-cents amount such as 35.35",
        ));
    }

    Ok(())
}

fn check_item(item: &ReceiptItem, index: usize) -> Result<(), ValidationError> {
    if item.short_description.trim().is_empty() {
        return Err(ValidationError::new(
            format!("items[{index}].shortDescription"),
            "item description is required",
        ));
    }

    if item.price.is_empty() {
        return Err(ValidationError::new(
            format!("items[{index}].price"),
            "price is required",
        ));
    }
    if money::parse_cents(&item.price).is_none() {
        return Err(ValidationError::new(
            format!("items[{index}].price"),
            "price must be a dollars-and-cents amount such as 2.25",
        ));
    }

    Ok(())
}

fn check_purchase_date(raw: &str) -> Result<(), &'static str> {
    if raw.is_empty() {
        return Err("purchase date is required");
    }

    let bytes = raw.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && [0usize, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|&i| bytes[i].is_ascii_digit());
    if !shaped || NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_err() {
        return Err("purchase date must be a calendar date in YYYY-MM-DD form");
    }

    Ok(())
}

fn check_purchase_time(raw: &str) -> Result<(), &'static str> {
    if raw.is_empty() {
        return Err("purchase time is required");
    }

    let bytes = raw.as_bytes();
    let shaped = bytes.len() == 5
        && bytes[2] == b':'
        && [0usize, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
    if !shaped || NaiveTime::parse_from_str(raw, "%H:%M").is_err() {
        return Err("purchase time must be a 24-hour time in HH:MM form");
    }

    Ok(())
}
