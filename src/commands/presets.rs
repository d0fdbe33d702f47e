//! @acp:module "Presets Command"
//! @acp:summary "List the configured exercise presets"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::config::{describe, Config};

/// Execute the presets command
pub fn execute_presets(config: &Config, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&config.presets)?);
        return Ok(());
    }

    if config.presets.is_empty() {
        println!("{} No presets configured", style("•").dim());
        return Ok(());
    }

    println!("{} Presets:\n", style("→").cyan());
    for (name, constraints) in &config.presets {
        println!(
            "  {} {}",
            style(format!("{:<12}", name)).bold(),
            describe(constraints)
        );
    }
    println!(
        "\n  {} {}",
        style(format!("{:<12}", "(default)")).dim(),
        describe(&config.defaults)
    );

    Ok(())
}
