//! @acp:module "Row"
//! @acp:summary "Constrained generation and local repair of exercise rows"
//! @acp:domain generator
//! @acp:layer feature
//!
//! A row starts as independent random draws and is then repaired stage by
//! stage toward the constraints. Repairs are best-effort: when a target
//! cannot be reached the partial row is kept and a [`Diagnostic`] says why.

pub mod assembler;
pub mod bounds;
pub mod digits;
pub mod leading;
pub mod sampler;
pub mod sign;
pub mod types;

pub use assembler::{generate_row, generate_row_with, Plan, RowGenerator};
pub use bounds::{
    enforce_sum_bound, raise_sum_to, raise_sum_within, reduce_sum_by, reduce_sum_within,
};
pub use digits::{digits_of, enforce_sum_digit_cap, overage, shrink_bound};
pub use leading::{enforce_given_leading, LeadingShape};
pub use sampler::{build_row, sample_nonzero};
pub use sign::enforce_positive_first;
pub use types::{Constraints, Diagnostic, GeneratedRow, RepairOutcome, SumBounds};
