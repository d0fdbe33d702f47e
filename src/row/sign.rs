//! @acp:module "Sign Normalizer"
//! @acp:summary "Guarantee a strictly positive first element without changing the sum"
//! @acp:domain generator
//! @acp:layer logic

use rand::Rng;

use super::sampler::sample_nonzero;
use super::types::Diagnostic;
use crate::error::Result;

/// Make `row[0]` strictly positive.
///
/// If any element is positive the row is rotated left so that the first
/// positive element leads. Otherwise a fresh positive leader is drawn and the
/// difference is spread over the remaining elements as one unit at a time
/// round-robin from index 1 would, so the total is unchanged.
///
/// A single-element row has nothing to absorb the difference; the value is
/// replaced and a diagnostic is returned.
pub fn enforce_positive_first<R: Rng + ?Sized>(
    rng: &mut R,
    row: &mut [i64],
    max_magnitude: i64,
) -> Result<Option<Diagnostic>> {
    if row.is_empty() {
        return Ok(None);
    }

    if let Some(first_positive) = row.iter().position(|v| *v > 0) {
        row.rotate_left(first_positive);
        return Ok(None);
    }

    let replacement = sample_nonzero(rng, max_magnitude, false)?;
    let previous = row[0];
    row[0] = replacement;

    if row.len() == 1 {
        tracing::warn!(
            "Replaced single value {} with {}; row sum changed",
            previous,
            replacement
        );
        return Ok(Some(Diagnostic::LeadingValueReplaced {
            previous,
            replacement,
        }));
    }

    let diff = replacement - previous;
    let tail = row.len() as i64 - 1;
    for (offset, value) in row[1..].iter_mut().enumerate() {
        *value -= diff / tail + i64::from((offset as i64) < diff % tail);
    }

    tracing::debug!("Drew positive leader {} for all-negative row", replacement);
    Ok(None)
}
