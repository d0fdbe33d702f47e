//! @acp:module "Digit Cap Planner"
//! @acp:summary "Per-digit caps on decimal numbers: bound shrinking and overage correction"
//! @acp:domain generator
//! @acp:layer logic

use super::bounds::{raise_sum_to, reduce_sum_by};
use super::types::Diagnostic;

/// Upper limit on correction passes; each productive pass removes at least one unit
const MAX_DIGIT_PASSES: usize = 32;

/// Decimal digits of `|n|`, most significant first. `0` yields `[0]`.
pub fn digits_of(n: i64) -> Vec<u8> {
    let mut rest = n.unsigned_abs();
    if rest == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    while rest > 0 {
        digits.push((rest % 10) as u8);
        rest /= 10;
    }
    digits.reverse();
    digits
}

/// Rebuild a non-negative number from most-significant-first digits
pub fn from_digits(digits: &[u8]) -> i64 {
    digits
        .iter()
        .fold(0i64, |acc, d| acc * 10 + i64::from(*d))
}

/// Largest `digit_count`-digit value whose digits are all `cap`, e.g. `(3, 4) -> 444`
pub fn cap_total(digit_count: u32, cap: u8) -> i64 {
    (0..digit_count).fold(0i64, |acc, _| acc * 10 + i64::from(cap))
}

/// Largest value `<= max` whose every digit is `<= cap`.
///
/// The first digit above the cap becomes the cap, and so does every digit
/// after it: `500` with cap 4 becomes `444`. Negative input is returned as is.
pub fn shrink_bound(max: i64, cap: u8) -> i64 {
    if max < 0 {
        return max;
    }
    let mut digits = digits_of(max);
    if let Some(first_over) = digits.iter().position(|d| *d > cap) {
        for digit in &mut digits[first_over..] {
            *digit = cap;
        }
    }
    from_digits(&digits)
}

/// Sum of `(digit - cap) * place` over every digit of `|sum|` above `cap`
pub fn overage(sum: i64, cap: u8) -> i64 {
    digits_of(sum)
        .iter()
        .rev()
        .scan(1i64, |place, digit| {
            let over = if *digit > cap {
                i64::from(digit - cap) * *place
            } else {
                0
            };
            *place = place.saturating_mul(10);
            Some(over)
        })
        .sum()
}

/// Pull `sum(values) + offset` toward a value with every digit `<= cap`.
///
/// Positive totals are reduced by their overage, negative totals raised by it,
/// until no digit is over or a pass makes no progress. `offset` covers the
/// parts of the row that must not be touched (leader, trailing values).
pub fn enforce_sum_digit_cap(
    values: &mut [i64],
    offset: i64,
    cap: u8,
    max_magnitude: i64,
    allow_negative: bool,
) -> Option<Diagnostic> {
    for _ in 0..MAX_DIGIT_PASSES {
        let partial: i64 = values.iter().sum();
        let total = partial.saturating_add(offset);
        let over_by = overage(total, cap);
        if over_by == 0 {
            return None;
        }

        if total > 0 {
            reduce_sum_by(values, over_by, allow_negative);
        } else {
            raise_sum_to(values, max_magnitude, partial.saturating_add(over_by));
        }

        if values.iter().sum::<i64>() == partial {
            break;
        }
    }

    let sum = values.iter().sum::<i64>().saturating_add(offset);
    let over_by = overage(sum, cap);
    if over_by == 0 {
        return None;
    }
    tracing::warn!("Sum {} has digits above {}, over by {}", sum, cap, over_by);
    Some(Diagnostic::DigitCapExceeded {
        sum,
        cap: i64::from(cap),
        over_by,
    })
}
