//! Fixed-point parsing for the monetary strings carried on receipts.
//!
//! Amounts must read as one or more ASCII digits, a decimal point, and
//! exactly two more digits. Everything downstream works in integer cents so
//! divisibility checks never go through floating point.

/// Parse a `12.00`-style amount into integer cents. Returns `None` for any
/// deviation from the grammar, including signs, grouping, or extra digits.
pub(crate) fn parse_cents(raw: &str) -> Option<u64> {
    let (dollars, cents) = raw.split_once('.')?;
    if dollars.is_empty() || cents.len() != 2 {
        return None;
    }
    if !dollars.bytes().all(|b| b.is_ascii_digit()) || !cents.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let dollars: u64 = dollars.parse().ok()?;
    let cents: u64 = cents.parse().ok()?;
    dollars.checked_mul(100)?.checked_add(cents)
}
