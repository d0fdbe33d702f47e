//! @acp:module "Row Assembler"
//! @acp:summary "Sanitize a constraint record and run the repair pipeline"
//! @acp:domain generator
//! @acp:layer service
//!
//! Stages, in order:
//! 1. Sanitize the constraints (clamp, never reject)
//! 2. Tighten the sum bound under the sum digit cap
//! 3. Draw the free slots and make the first one positive
//! 4. Pull the free sum into the window left over by the trailing values
//! 5. Correct the sum digits
//! 6. Shape the leading number and re-balance the tail
//! 7. Append the trailing values

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::bounds::enforce_sum_bound;
use super::digits::{enforce_sum_digit_cap, shrink_bound};
use super::leading::{enforce_given_leading, LeadingShape};
use super::sampler::build_row;
use super::sign::enforce_positive_first;
use super::types::{Constraints, GeneratedRow, SumBounds};
use crate::error::Result;

/// Largest usable `max_sum`; with [`MAX_COUNT`] slots no row sum can overflow
pub const MAX_SUM_LIMIT: i64 = 1_000_000_000_000_000;

/// Largest number of free slots in one row
pub const MAX_COUNT: usize = 4096;

/// Constraints after clamping to a usable range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub count: usize,
    pub max_magnitude: i64,
    pub max_sum: i64,
    pub allow_negative: bool,
    pub answer_can_be_negative: bool,
    pub trailing_values: Vec<i64>,
    pub leading: Option<LeadingShape>,
    /// `None` when the sum digits are unconstrained
    pub sum_digit_cap: Option<u8>,
}

impl Plan {
    /// Clamp every field the pipeline cannot work with
    pub fn sanitize(constraints: &Constraints) -> Self {
        let mut max_magnitude = constraints.max_magnitude.min(MAX_SUM_LIMIT);
        let mut max_sum = constraints.max_sum.min(MAX_SUM_LIMIT);

        if max_magnitude >= max_sum {
            max_magnitude = max_sum.saturating_sub(1);
        }
        // the sampler needs at least one nonzero value in range
        if max_magnitude < 1 {
            max_magnitude = 1;
        }
        let count = usize::try_from(constraints.count)
            .ok()
            .filter(|c| *c > 0)
            .unwrap_or(1)
            .min(MAX_COUNT);
        if max_sum <= max_magnitude {
            max_sum = max_magnitude + 1;
        }

        let sum_digit_cap = u8::try_from(constraints.sum_digit_cap)
            .ok()
            .filter(|cap| *cap < 9);

        let leading = (constraints.leading_digit_count > 0).then(|| LeadingShape {
            digit_count: constraints.leading_digit_count,
            digit_cap: constraints.leading_digit_cap.clamp(0, 9) as u8,
        });

        Self {
            count,
            max_magnitude,
            max_sum,
            allow_negative: constraints.allow_negative,
            answer_can_be_negative: constraints.answer_can_be_negative,
            trailing_values: constraints
                .trailing_values
                .iter()
                .map(|v| (*v).clamp(-MAX_SUM_LIMIT, MAX_SUM_LIMIT))
                .collect(),
            leading,
            sum_digit_cap,
        }
    }

    /// Window for the whole row, after the digit-cap pre-shrink
    pub fn sum_bounds(&self) -> SumBounds {
        let max = match self.sum_digit_cap {
            Some(cap) => shrink_bound(self.max_sum, cap),
            None => self.max_sum,
        };
        let min = if self.answer_can_be_negative { -max } else { 0 };
        SumBounds::new(min, max)
    }
}

/// Build one row with the given random source
pub fn generate_row_with<R: Rng + ?Sized>(
    rng: &mut R,
    constraints: &Constraints,
) -> Result<GeneratedRow> {
    let plan = Plan::sanitize(constraints);
    let bounds = plan.sum_bounds();
    let trailing_sum = plan
        .trailing_values
        .iter()
        .fold(0i64, |acc, v| acc.saturating_add(*v));
    let free_bounds = bounds.shifted_down(trailing_sum);
    tracing::debug!(?plan, ?bounds, "Generating row");

    let mut diagnostics = Vec::new();
    let mut values = build_row(rng, plan.count, plan.max_magnitude, plan.allow_negative)?;
    tracing::debug!(?values, "Initial sample");

    diagnostics.extend(enforce_positive_first(rng, &mut values, plan.max_magnitude)?);
    diagnostics.extend(enforce_sum_bound(
        &mut values,
        free_bounds,
        plan.max_magnitude,
        plan.allow_negative,
    ));

    // covers rows whose leading shape is skipped; an applied leader is
    // re-checked on the tail below
    let mut digit_diagnostic = plan.sum_digit_cap.and_then(|cap| {
        enforce_sum_digit_cap(
            &mut values,
            trailing_sum,
            cap,
            plan.max_magnitude,
            plan.allow_negative,
        )
    });

    // reduction may have pushed the leader below zero
    diagnostics.extend(enforce_positive_first(rng, &mut values, plan.max_magnitude)?);

    if let Some(shape) = plan.leading {
        diagnostics.extend(enforce_given_leading(
            rng,
            &mut values,
            shape,
            plan.max_magnitude,
            free_bounds,
            plan.allow_negative,
        ));

        if let Some(cap) = plan.sum_digit_cap {
            let offset = trailing_sum.saturating_add(values[0]);
            digit_diagnostic = enforce_sum_digit_cap(
                &mut values[1..],
                offset,
                cap,
                plan.max_magnitude,
                plan.allow_negative,
            );
        }
    }
    diagnostics.extend(digit_diagnostic);

    values.extend_from_slice(&plan.trailing_values);
    let row = GeneratedRow {
        values,
        diagnostics,
    };
    tracing::debug!(values = ?row.values, sum = row.sum(), "Row assembled");

    Ok(row)
}

/// Build one row with the thread-local random source
pub fn generate_row(constraints: &Constraints) -> Result<GeneratedRow> {
    generate_row_with(&mut rand::rng(), constraints)
}

/// @acp:summary "Row generator owning its random source"
///
/// Use [`RowGenerator::seeded`] for reproducible exercise sheets.
#[derive(Debug, Clone)]
pub struct RowGenerator<R = StdRng> {
    rng: R,
}

impl RowGenerator<StdRng> {
    /// Deterministic generator
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RowGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, constraints: &Constraints) -> Result<GeneratedRow> {
        generate_row_with(&mut self.rng, constraints)
    }

    /// `exercises` independent rows for the same constraints
    pub fn generate_many(
        &mut self,
        constraints: &Constraints,
        exercises: usize,
    ) -> Result<Vec<GeneratedRow>> {
        (0..exercises).map(|_| self.generate(constraints)).collect()
    }
}
