//! @acp:module "Configuration"
//! @acp:summary "Exercise sheet configuration loading, defaults and presets"
//! @acp:domain generator
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{AbacusError, Result};
use crate::row::Constraints;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = ".abacus.config.json";

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_exercises() -> usize {
    3
}

/// @acp:summary "Main configuration structure"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Config format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Rows printed per run
    #[serde(default = "default_exercises")]
    pub exercises: usize,

    /// Constraints used when no preset is named
    #[serde(default)]
    pub defaults: Constraints,

    /// Named constraint sets
    #[serde(default = "default_presets")]
    pub presets: BTreeMap<String, Constraints>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            exercises: default_exercises(),
            defaults: Constraints::default(),
            presets: default_presets(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Look up a named preset
    pub fn preset(&self, name: &str) -> Result<&Constraints> {
        self.presets
            .get(name)
            .ok_or_else(|| AbacusError::UnknownPreset(name.to_string()))
    }

    /// Preset constraints when a name is given, the defaults otherwise
    pub fn constraints_for(&self, preset: Option<&str>) -> Result<Constraints> {
        match preset {
            Some(name) => self.preset(name).cloned(),
            None => Ok(self.defaults.clone()),
        }
    }
}

fn preset(count: i64, max_magnitude: i64, max_sum: i64) -> Constraints {
    Constraints {
        count,
        max_magnitude,
        max_sum,
        allow_negative: true,
        answer_can_be_negative: false,
        ..Constraints::default()
    }
}

fn default_presets() -> BTreeMap<String, Constraints> {
    let mut presets = BTreeMap::new();
    presets.insert("starter".to_string(), preset(2, 4, 4));
    presets.insert("standard".to_string(), preset(3, 5, 15));
    presets.insert("advanced".to_string(), preset(5, 7, 25));
    presets
}

/// One-line summary of a constraint set, for listings
pub fn describe(constraints: &Constraints) -> String {
    let mut parts = vec![
        format!("{} numbers", constraints.count),
        format!("|n| <= {}", constraints.max_magnitude),
        format!("sum <= {}", constraints.max_sum),
    ];
    if !constraints.allow_negative {
        parts.push("positive only".to_string());
    }
    if constraints.answer_can_be_negative {
        parts.push("negative answers".to_string());
    }
    if constraints.leading_digit_count > 0 {
        parts.push(format!(
            "{}-digit leader (digits <= {})",
            constraints.leading_digit_count, constraints.leading_digit_cap
        ));
    }
    if !constraints.trailing_values.is_empty() {
        let trailing: Vec<String> = constraints
            .trailing_values
            .iter()
            .map(|v| v.to_string())
            .collect();
        parts.push(format!("ends with {}", trailing.join(", ")));
    }
    if (0..9).contains(&constraints.sum_digit_cap) {
        parts.push(format!("answer digits <= {}", constraints.sum_digit_cap));
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_presets() {
        let config = Config::default();
        let standard = config.preset("standard").unwrap();
        assert_eq!(standard.count, 3);
        assert_eq!(standard.max_sum, 15);
        assert!(matches!(
            config.preset("expert"),
            Err(AbacusError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"exercises": 10}"#).unwrap();
        assert_eq!(config.exercises, 10);
        assert_eq!(config.defaults, Constraints::default());
        assert_eq!(config.presets.len(), 3);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.exercises = 7;
        config.defaults.trailing_values = vec![4];
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_constraints_for() {
        let config = Config::default();
        assert_eq!(config.constraints_for(None).unwrap(), config.defaults);
        assert_eq!(config.constraints_for(Some("starter")).unwrap().max_sum, 4);
    }

    #[test]
    fn test_describe() {
        let constraints = Constraints {
            count: 3,
            max_magnitude: 6,
            max_sum: 24,
            leading_digit_count: 2,
            leading_digit_cap: 8,
            trailing_values: vec![4],
            ..Constraints::default()
        };
        assert_eq!(
            describe(&constraints),
            "3 numbers, |n| <= 6, sum <= 24, 2-digit leader (digits <= 8), ends with 4"
        );
    }
}
