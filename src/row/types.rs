//! @acp:module "Row Types"
//! @acp:summary "Constraint record, generated row and repair diagnostics"
//! @acp:domain generator
//! @acp:layer model

use serde::{Deserialize, Serialize};

fn default_count() -> i64 {
    4
}

fn default_max_magnitude() -> i64 {
    5
}

fn default_max_sum() -> i64 {
    15
}

fn default_true() -> bool {
    true
}

fn default_digit_cap() -> i64 {
    9
}

/// @acp:summary "One generation request"
///
/// Out-of-range fields are clamped by the assembler, never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    /// Number of free slots to generate
    #[serde(default = "default_count")]
    pub count: i64,

    /// Absolute bound on each free element
    #[serde(default = "default_max_magnitude")]
    pub max_magnitude: i64,

    /// Upper bound on the row sum
    #[serde(default = "default_max_sum")]
    pub max_sum: i64,

    /// Whether free elements may be negative
    #[serde(default = "default_true")]
    pub allow_negative: bool,

    /// Whether the row sum may be negative (lower bound becomes `-max_sum`)
    #[serde(default)]
    pub answer_can_be_negative: bool,

    /// Values forced, in order, onto the end of the row
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trailing_values: Vec<i64>,

    /// If nonzero, the first element must have exactly this many digits
    #[serde(default)]
    pub leading_digit_count: u32,

    /// Per-digit cap for the leading number
    #[serde(default = "default_digit_cap")]
    pub leading_digit_cap: i64,

    /// Per-digit cap for the sum; 9 or out of range means unconstrained
    #[serde(default = "default_digit_cap")]
    pub sum_digit_cap: i64,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            count: default_count(),
            max_magnitude: default_max_magnitude(),
            max_sum: default_max_sum(),
            allow_negative: true,
            answer_can_be_negative: false,
            trailing_values: Vec::new(),
            leading_digit_count: 0,
            leading_digit_cap: default_digit_cap(),
            sum_digit_cap: default_digit_cap(),
        }
    }
}

impl Constraints {
    /// Lower sum bound implied by the sign policy
    pub fn min_sum(&self) -> i64 {
        if self.answer_can_be_negative {
            self.max_sum.saturating_neg()
        } else {
            0
        }
    }
}

/// Inclusive sum window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumBounds {
    pub min: i64,
    pub max: i64,
}

impl SumBounds {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Same window with `amount` taken off both ends
    pub fn shifted_down(self, amount: i64) -> Self {
        Self {
            min: self.min.saturating_sub(amount),
            max: self.max.saturating_sub(amount),
        }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Result of a single best-effort repair pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RepairOutcome {
    /// Units still missing from the target (0 when the target was met)
    pub shortfall: i64,
}

impl RepairOutcome {
    pub fn achieved(&self) -> bool {
        self.shortfall == 0
    }
}

/// @acp:summary "Soft failure reported when a repair stalls"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Diagnostic {
    SumNotReduced {
        shortfall: i64,
    },
    SumNotRaised {
        shortfall: i64,
    },
    DigitCapExceeded {
        sum: i64,
        cap: i64,
        over_by: i64,
    },
    LeadingShapeSkipped {
        digit_count: u32,
        digit_cap: i64,
        upper_bound: i64,
    },
    LeadingValueReplaced {
        previous: i64,
        replacement: i64,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::SumNotReduced { shortfall } => {
                write!(f, "could not fully reduce sum, short by {}", shortfall)
            }
            Diagnostic::SumNotRaised { shortfall } => {
                write!(f, "could not fully raise sum, short by {}", shortfall)
            }
            Diagnostic::DigitCapExceeded { sum, cap, over_by } => write!(
                f,
                "sum {} still has digits above {} (over by {})",
                sum, cap, over_by
            ),
            Diagnostic::LeadingShapeSkipped {
                digit_count,
                digit_cap,
                upper_bound,
            } => write!(
                f,
                "no {}-digit leading number with digits <= {} fits under {}",
                digit_count, digit_cap, upper_bound
            ),
            Diagnostic::LeadingValueReplaced {
                previous,
                replacement,
            } => write!(
                f,
                "single value {} replaced by {} to keep the first value positive",
                previous, replacement
            ),
        }
    }
}

/// @acp:summary "Finished row plus every diagnostic raised while building it"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedRow {
    pub values: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl GeneratedRow {
    /// The answer to the exercise
    pub fn sum(&self) -> i64 {
        self.values.iter().fold(0, |acc, v| acc.saturating_add(*v))
    }

    /// True when no repair stage reported a shortfall
    pub fn is_compliant(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
