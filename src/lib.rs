#![forbid(unsafe_code)]

//! @acp:module "Abacus Library"
//! @acp:summary "Constrained random number rows for abacus and mental-arithmetic drills"
//! @acp:domain generator
//! @acp:layer api
//! @acp:stability stable
//!
//! # Abacus Drill
//!
//! Generates rows of signed integers whose sum stays inside a bound, with
//! optional trailing values, a shaped leading number and a per-digit cap on
//! the answer.
//!
//! ## Example
//!
//! ```rust,no_run
//! use abacus::{Constraints, RowGenerator};
//!
//! fn main() -> abacus::Result<()> {
//!     let constraints = Constraints {
//!         count: 3,
//!         max_magnitude: 6,
//!         max_sum: 24,
//!         leading_digit_count: 2,
//!         leading_digit_cap: 8,
//!         trailing_values: vec![4],
//!         ..Constraints::default()
//!     };
//!
//!     let mut generator = RowGenerator::seeded(42);
//!     let row = generator.generate(&constraints)?;
//!     println!("{:?} = {}", row.values, row.sum());
//!
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod row;

// Re-exports
pub use config::Config;
pub use error::{AbacusError, Result};
pub use row::{
    generate_row, generate_row_with, Constraints, Diagnostic, GeneratedRow, LeadingShape,
    RepairOutcome, RowGenerator, SumBounds,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
