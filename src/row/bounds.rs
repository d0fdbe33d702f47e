//! @acp:module "Sum Bounds"
//! @acp:summary "Best-effort repair of a row sum into an inclusive window"
//! @acp:domain generator
//! @acp:layer logic
//!
//! Both directions spread the adjustment over the whole row and stop after a
//! round with no progress.

use super::types::{Diagnostic, RepairOutcome, SumBounds};

/// Cyclic index cursor over `start..len`
#[derive(Debug, Clone)]
pub(crate) struct RoundRobin {
    start: usize,
    len: usize,
    next: usize,
}

impl RoundRobin {
    pub(crate) fn new(start: usize, len: usize) -> Self {
        Self {
            start,
            len,
            next: start,
        }
    }

    /// Number of indices visited per cycle
    pub(crate) fn span(&self) -> usize {
        self.len.saturating_sub(self.start)
    }

    /// Next index, wrapping back to `start`; `None` on an empty span
    pub(crate) fn advance(&mut self) -> Option<usize> {
        if self.span() == 0 {
            return None;
        }
        let index = self.next;
        self.next += 1;
        if self.next >= self.len {
            self.next = self.start;
        }
        Some(index)
    }
}

/// Reduce the row sum by `amount`, proportionally across elements.
///
/// Each round takes `ceil(remaining / len)` from every element in turn.
/// Elements never become 0; without negatives they never drop below 1
/// either, so a round where nothing could move ends the repair with a
/// shortfall.
pub fn reduce_sum_by(row: &mut [i64], amount: i64, allow_negative: bool) -> RepairOutcome {
    let shortfall = reduce_steps(row, amount, allow_negative);
    if shortfall > 0 {
        tracing::warn!("Could not fully reduce sum, short by {}", shortfall);
    }
    RepairOutcome { shortfall }
}

/// Reduce the row sum to at most `bounds.max` without passing `bounds.min`.
///
/// Same walk as [`reduce_sum_by`]. With negatives allowed, a last missing
/// unit is taken by flipping a `1` to `-1`, the mirror of
/// [`raise_sum_within`].
pub fn reduce_sum_within(
    row: &mut [i64],
    max_magnitude: i64,
    bounds: SumBounds,
    allow_negative: bool,
) -> RepairOutcome {
    let amount = row.iter().sum::<i64>().saturating_sub(bounds.max);
    let mut shortfall = reduce_steps(row, amount, allow_negative);
    if shortfall == 1 && allow_negative {
        let headroom = bounds.max.saturating_sub(bounds.min);
        shortfall -= cross_last_unit(row, -1, max_magnitude, headroom);
    }

    if shortfall > 0 {
        tracing::warn!("Could not fully reduce sum, short by {}", shortfall);
    }
    RepairOutcome { shortfall }
}

/// Proportional reduction loop; returns the units still missing
fn reduce_steps(row: &mut [i64], amount: i64, allow_negative: bool) -> i64 {
    if amount <= 0 {
        return 0;
    }
    if row.is_empty() {
        return amount;
    }

    let len = row.len() as i64;
    let mut difference = amount;
    let mut changed = true;

    while difference > 0 && changed {
        changed = false;
        let subtractor = difference / len + i64::from(difference % len != 0);

        for value in row.iter_mut() {
            if difference <= 0 {
                break;
            }
            let before = *value;
            let step = subtractor.min(difference);
            *value -= step;
            difference -= step;

            if *value == 0 {
                if allow_negative && difference > 0 {
                    *value = -1;
                    difference -= 1;
                } else {
                    *value = 1;
                    difference += 1;
                }
            } else if *value < 0 && !allow_negative {
                *value += step;
                difference += step;
            }

            if *value != before {
                changed = true;
            }
        }
    }

    difference.max(0)
}

/// Raise the row sum to at least `min_sum`, round-robin.
///
/// Each visit adds an even share of the remaining deficit (at least one
/// unit). No element is pushed past `max_magnitude`, and a step that would
/// land on 0 goes one further, so `-1` jumps straight to `1`. The sum never
/// ends above `min_sum`.
pub fn raise_sum_to(row: &mut [i64], max_magnitude: i64, min_sum: i64) -> RepairOutcome {
    raise_sum_within(row, max_magnitude, SumBounds::new(min_sum, min_sum))
}

/// Raise the row sum to at least `bounds.min` without passing `bounds.max`.
///
/// Same walk as [`raise_sum_to`]. When a single unit is missing and only a
/// `-1` can still move, it jumps to `1` and another element gives back one
/// unit; if none can, the sum may land one above `bounds.min` as long as it
/// stays within `bounds.max`.
pub fn raise_sum_within(
    row: &mut [i64],
    max_magnitude: i64,
    bounds: SumBounds,
) -> RepairOutcome {
    let mut deficit = bounds.min.saturating_sub(row.iter().sum::<i64>());
    if deficit <= 0 {
        return RepairOutcome::default();
    }

    let mut cursor = RoundRobin::new(0, row.len());
    let mut idle = 0;
    while deficit > 0 && idle < cursor.span() {
        let Some(index) = cursor.advance() else {
            break;
        };
        let room = max_magnitude.saturating_sub(row[index]).min(deficit);
        let mut step = (deficit / cursor.span() as i64).max(1).min(room);
        if step > 0 && row[index] + step == 0 {
            step += if step < room { 1 } else { -1 };
        }
        if step > 0 {
            row[index] += step;
            deficit -= step;
            idle = 0;
        } else {
            idle += 1;
        }
    }

    if deficit == 1 {
        let headroom = bounds.max.saturating_sub(bounds.min);
        deficit -= cross_last_unit(row, 1, max_magnitude, headroom);
    }

    if deficit > 0 {
        tracing::warn!("Could not fully raise sum, short by {}", deficit);
    }
    RepairOutcome { shortfall: deficit }
}

/// Flip a unit element across zero when exactly one unit is still missing.
///
/// `toward` is `1` when raising (`-1` becomes `1`) and `-1` when reducing
/// (`1` becomes `-1`). Another element moves one unit back so the sum lands
/// exactly on the target; when none can, the sum overshoots by one if
/// `headroom` allows it. Returns the units gained toward the target.
fn cross_last_unit(row: &mut [i64], toward: i64, max_magnitude: i64, headroom: i64) -> i64 {
    let Some(pivot) = row.iter().position(|v| *v == -toward) else {
        return 0;
    };

    let donor = (0..row.len()).find(|&index| {
        let moved = row[index] - toward;
        index != pivot && moved != 0 && moved.abs() <= max_magnitude
    });

    match donor {
        Some(donor) => {
            row[pivot] = toward;
            row[donor] -= toward;
            1
        }
        None if headroom >= 1 => {
            row[pivot] = toward;
            1
        }
        None => 0,
    }
}

/// Pull the row sum into `bounds`: reduce past the max first, then raise to the min.
pub fn enforce_sum_bound(
    row: &mut [i64],
    bounds: SumBounds,
    max_magnitude: i64,
    allow_negative: bool,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let reduced = reduce_sum_within(row, max_magnitude, bounds, allow_negative);
    if !reduced.achieved() {
        diagnostics.push(Diagnostic::SumNotReduced {
            shortfall: reduced.shortfall,
        });
    }

    let raised = raise_sum_within(row, max_magnitude, bounds);
    if !raised.achieved() {
        diagnostics.push(Diagnostic::SumNotRaised {
            shortfall: raised.shortfall,
        });
    }

    diagnostics
}
