//! @acp:module "Leading Number Shaper"
//! @acp:summary "Replace the first element with a multi-digit number and re-balance the tail"
//! @acp:domain generator
//! @acp:layer logic

use rand::Rng;

use super::bounds::enforce_sum_bound;
use super::digits::{cap_total, from_digits};
use super::types::{Diagnostic, SumBounds};

/// Draws allowed before falling back to the all-ones leader
const MAX_LEADING_DRAWS: usize = 1000;

/// Longest leader that still fits in an `i64`
pub const MAX_LEADING_DIGITS: u32 = 18;

/// Required shape of the first element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadingShape {
    /// Exact number of decimal digits
    pub digit_count: u32,
    /// Cap applied to every digit (1-9)
    pub digit_cap: u8,
}

/// Put a `shape.digit_count`-digit leader with every digit in `1..=digit_cap` at `row[0]`.
///
/// Digits are never 0, so leaders such as `10`, `20` or `105` are never
/// produced.
///
/// The leader must leave room for at least 1 per tail element under
/// `bounds.max`. When no leader fits the row is left as is. Otherwise the tail
/// (`row[1..]`) is pulled back into `bounds` minus the new leader, so the
/// whole row keeps its original bound.
pub fn enforce_given_leading<R: Rng + ?Sized>(
    rng: &mut R,
    row: &mut [i64],
    shape: LeadingShape,
    max_magnitude: i64,
    bounds: SumBounds,
    allow_negative: bool,
) -> Vec<Diagnostic> {
    let digit_count = shape.digit_count.min(MAX_LEADING_DIGITS);
    let digit_cap = shape.digit_cap.min(9);
    if row.is_empty() || digit_count == 0 {
        return Vec::new();
    }

    let lower_bound = 10i64.pow(digit_count - 1);
    let tail_floor = row.len() as i64 - 1;
    let upper_bound = bounds
        .max
        .saturating_sub(tail_floor)
        .min(cap_total(digit_count, digit_cap));
    let smallest = cap_total(digit_count, 1);

    if upper_bound <= lower_bound || smallest > upper_bound {
        tracing::debug!(
            "No {}-digit leader with digits <= {} fits under {}",
            digit_count,
            digit_cap,
            upper_bound
        );
        return vec![Diagnostic::LeadingShapeSkipped {
            digit_count,
            digit_cap: i64::from(digit_cap),
            upper_bound,
        }];
    }

    let leader = draw_leader(rng, digit_count, digit_cap, lower_bound, upper_bound)
        .unwrap_or(smallest);
    let previous = row[0];
    row[0] = leader;
    tracing::debug!(
        "Leader {} -> {} (delta {})",
        previous,
        leader,
        previous - leader
    );

    enforce_sum_bound(
        &mut row[1..],
        bounds.shifted_down(leader),
        max_magnitude,
        allow_negative,
    )
}

/// Digit-by-digit draws from `1..=digit_cap` until one lands in `[lower, upper]`
fn draw_leader<R: Rng + ?Sized>(
    rng: &mut R,
    digit_count: u32,
    digit_cap: u8,
    lower: i64,
    upper: i64,
) -> Option<i64> {
    (0..MAX_LEADING_DRAWS).find_map(|_| {
        let digits: Vec<u8> = (0..digit_count)
            .map(|_| rng.random_range(1..=digit_cap))
            .collect();
        let value = from_digits(&digits);
        (lower..=upper).contains(&value).then_some(value)
    })
}
