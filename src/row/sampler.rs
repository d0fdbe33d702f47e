//! @acp:module "Row Sampler"
//! @acp:summary "Nonzero bounded draws and the initial free-slot row"
//! @acp:domain generator
//! @acp:layer logic

use rand::Rng;

use crate::error::{AbacusError, Result};

/// Draw a nonzero integer from `[-bound, bound]`, or `[1, bound]` when
/// negatives are not allowed.
///
/// Fails instead of spinning when `bound < 1`, since no nonzero value
/// exists in that range.
pub fn sample_nonzero<R: Rng + ?Sized>(rng: &mut R, bound: i64, allow_negative: bool) -> Result<i64> {
    if bound < 1 {
        return Err(AbacusError::InvalidBound { bound });
    }

    if !allow_negative {
        return Ok(rng.random_range(1..=bound));
    }

    loop {
        let value = rng.random_range(-bound..=bound);
        if value != 0 {
            return Ok(value);
        }
    }
}

/// Build `count` independent draws
pub fn build_row<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    max_magnitude: i64,
    allow_negative: bool,
) -> Result<Vec<i64>> {
    (0..count)
        .map(|_| sample_nonzero(rng, max_magnitude, allow_negative))
        .collect()
}
