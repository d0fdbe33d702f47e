//! @acp:module "Generate Command"
//! @acp:summary "Print a sheet of exercises"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;
use serde::Serialize;

use crate::config::Config;
use crate::row::{Constraints, Diagnostic, GeneratedRow, RowGenerator};

const RULE: &str = "-------------------";

/// Command-line overrides applied on top of the configured constraints
#[derive(Debug, Clone, Default)]
pub struct ConstraintOverrides {
    pub count: Option<i64>,
    pub max_magnitude: Option<i64>,
    pub max_sum: Option<i64>,
    pub no_negative: bool,
    pub negative_answer: bool,
    pub trailing: Vec<i64>,
    pub leading_digits: Option<u32>,
    pub leading_cap: Option<i64>,
    pub sum_cap: Option<i64>,
}

impl ConstraintOverrides {
    pub fn apply(&self, constraints: &mut Constraints) {
        if let Some(count) = self.count {
            constraints.count = count;
        }
        if let Some(max_magnitude) = self.max_magnitude {
            constraints.max_magnitude = max_magnitude;
        }
        if let Some(max_sum) = self.max_sum {
            constraints.max_sum = max_sum;
        }
        if self.no_negative {
            constraints.allow_negative = false;
        }
        if self.negative_answer {
            constraints.answer_can_be_negative = true;
        }
        if !self.trailing.is_empty() {
            constraints.trailing_values = self.trailing.clone();
        }
        if let Some(digits) = self.leading_digits {
            constraints.leading_digit_count = digits;
        }
        if let Some(cap) = self.leading_cap {
            constraints.leading_digit_cap = cap;
        }
        if let Some(cap) = self.sum_cap {
            constraints.sum_digit_cap = cap;
        }
    }
}

/// Options for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Named preset from the config
    pub preset: Option<String>,
    /// Rows to print (config value when absent)
    pub exercises: Option<usize>,
    pub overrides: ConstraintOverrides,
    /// Seed for a reproducible sheet
    pub seed: Option<u64>,
    /// Output as JSON
    pub json: bool,
}

#[derive(Serialize)]
struct ExerciseJson<'a> {
    values: &'a [i64],
    sum: i64,
    diagnostics: &'a [Diagnostic],
}

/// Execute the generate command
pub fn execute_generate(options: GenerateOptions, config: &Config) -> Result<()> {
    let mut constraints = config.constraints_for(options.preset.as_deref())?;
    options.overrides.apply(&mut constraints);
    let exercises = options.exercises.unwrap_or(config.exercises);

    let mut generator = match options.seed {
        Some(seed) => RowGenerator::seeded(seed),
        None => RowGenerator::from_entropy(),
    };
    let rows = generator.generate_many(&constraints, exercises)?;

    if options.json {
        let payload: Vec<ExerciseJson> = rows
            .iter()
            .map(|row| ExerciseJson {
                values: &row.values,
                sum: row.sum(),
                diagnostics: &row.diagnostics,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    for row in &rows {
        println!("{}", render_exercise(row));
        for diagnostic in &row.diagnostics {
            println!("{} {}", style("⚠").yellow(), style(diagnostic).dim());
        }
    }

    Ok(())
}

/// Plain-text exercise: rule, one value per line, rule, answer
pub fn render_exercise(row: &GeneratedRow) -> String {
    let mut lines = Vec::with_capacity(row.values.len() + 3);
    lines.push(RULE.to_string());
    lines.extend(row.values.iter().map(|v| v.to_string()));
    lines.push(RULE.to_string());
    lines.push(row.sum().to_string());
    lines.join("\n")
}
