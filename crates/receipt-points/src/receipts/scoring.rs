use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

use super::domain::{Receipt, ReceiptItem};
use super::money;

/// A single rule's contribution to the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleContribution {
    pub rule: &'static str,
    pub points: u64,
}

/// Per-rule audit trail next to the total the store persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub total: u64,
    pub contributions: Vec<RuleContribution>,
}

/// Sum the seven scoring rules for an already-validated receipt.
///
/// The engine never re-validates and never fails: a numeric field that does
/// not parse contributes zero to its rule. All money arithmetic is integer
/// cents.
pub fn score(receipt: &Receipt) -> u64 {
    score_breakdown(receipt).total
}

/// Like [`score`], but keeping each rule's contribution for audit output.
pub fn score_breakdown(receipt: &Receipt) -> ScoreBreakdown {
    let contributions = vec![
        RuleContribution {
            rule: "retailer alphanumeric characters",
            points: retailer_points(&receipt.retailer),
        },
        RuleContribution {
            rule: "round dollar total",
            points: round_dollar_points(&receipt.total),
        },
        RuleContribution {
            rule: "total is a multiple of 0.25",
            points: quarter_multiple_points(&receipt.total),
        },
        RuleContribution {
            rule: "item pairs",
            points: item_pair_points(receipt.items.len()),
        },
        RuleContribution {
            rule: "description length multiple of 3",
            points: description_points(&receipt.items),
        },
        RuleContribution {
            rule: "odd purchase day",
            points: odd_day_points(&receipt.purchase_date),
        },
        RuleContribution {
            rule: "purchase between 14:00 and 16:00",
            points: afternoon_points(&receipt.purchase_time),
        },
    ];
    let total = contributions.iter().map(|c| c.points).sum();

    ScoreBreakdown {
        total,
        contributions,
    }
}

/// One point per ASCII letter or digit. Unicode letters do not count.
fn retailer_points(retailer: &str) -> u64 {
    retailer
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .count() as u64
}

fn round_dollar_points(total: &str) -> u64 {
    match money::parse_cents(total) {
        Some(cents) if cents % 100 == 0 => 50,
        _ => 0,
    }
}

fn quarter_multiple_points(total: &str) -> u64 {
    match money::parse_cents(total) {
        Some(cents) if cents % 25 == 0 => 25,
        _ => 0,
    }
}

fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * 5
}

/// `ceil(price * 0.2)` for every item whose trimmed description length is a
/// multiple of three. In cents that is `ceil(cents / 500)`.
fn description_points(items: &[ReceiptItem]) -> u64 {
    items
        .iter()
        .filter(|item| item.short_description.trim().len() % 3 == 0)
        .filter_map(|item| money::parse_cents(&item.price))
        .map(|cents| cents.div_ceil(500))
        .sum()
}

fn odd_day_points(purchase_date: &str) -> u64 {
    match NaiveDate::parse_from_str(purchase_date, "%Y-%m-%d") {
        Ok(date) if date.day() % 2 == 1 => 6,
        _ => 0,
    }
}

/// Half-open window: 14:00 counts, 16:00 does not. The comparison is on the
/// hour alone, so 14:00 itself lands inside.
fn afternoon_points(purchase_time: &str) -> u64 {
    match NaiveTime::parse_from_str(purchase_time, "%H:%M") {
        Ok(time) if (14..16).contains(&time.hour()) => 10,
        _ => 0,
    }
}
