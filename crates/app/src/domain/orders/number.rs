//! Order numbers
//!
//! Human-facing order numbers are `SS-` followed by the creation time in Unix milliseconds,
//! written in upper-case base 36.

use jiff::{SignedDuration, Timestamp};

pub const ORDER_NUMBER_PREFIX: &str = "SS-";

const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Order number for an order created at `at`.
#[must_use]
pub fn order_number(at: Timestamp) -> String {
    let millis = u64::try_from(at.as_millisecond()).unwrap_or_default();

    format!("{ORDER_NUMBER_PREFIX}{}", to_base36(millis))
}

/// Candidate numbers starting at `at` and advancing one millisecond at a time.
pub fn order_number_candidates(at: Timestamp, attempts: u32) -> impl Iterator<Item = String> {
    (0..attempts).map(move |offset| {
        let at = at
            .checked_add(SignedDuration::from_millis(i64::from(offset)))
            .unwrap_or(at);

        order_number(at)
    })
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();

    while value > 0 {
        let digit = usize::try_from(value % 36).unwrap_or_default();

        digits.push(DIGITS.get(digit).copied().map_or('0', char::from));
        value /= 36;
    }

    digits.iter().rev().collect()
}
