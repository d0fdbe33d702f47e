//! @acp:module "Init Command"
//! @acp:summary "Write a starter exercise configuration"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `abacus init`.

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::config::{describe, Config};

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Config file to write
    pub path: PathBuf,
    /// Force overwrite existing config
    pub force: bool,
    /// Rows printed per run
    pub exercises: Option<usize>,
    /// Skip interactive prompts
    pub yes: bool,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if options.path.exists() && !options.force {
        eprintln!(
            "{} Config file already exists. Use --force to overwrite.",
            style("✗").red()
        );
        std::process::exit(1);
    }

    let mut config = Config::default();
    if let Some(exercises) = options.exercises {
        config.exercises = exercises;
    }

    let interactive = !options.yes && options.exercises.is_none();
    if interactive {
        run_interactive_init(&mut config)?;
    }

    config.save(&options.path)?;
    println!(
        "{} Created {}",
        style("✓").green(),
        options.path.display()
    );

    println!("\n{}", style("Next steps:").bold());
    println!(
        "  1. Run {} to print a sheet",
        style("abacus generate").cyan()
    );
    println!(
        "  2. Run {} to see the built-in presets",
        style("abacus presets").cyan()
    );

    Ok(())
}

fn run_interactive_init(config: &mut Config) -> Result<()> {
    println!("{} Abacus Drill Setup\n", style("→").cyan());

    let names: Vec<String> = config.presets.keys().cloned().collect();
    let items: Vec<String> = names
        .iter()
        .map(|name| format!("{} ({})", name, describe(&config.presets[name])))
        .collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Start the defaults from which preset?")
        .items(&items)
        .default(0)
        .interact()?;
    config.defaults = config.presets[&names[selection]].clone();

    config.exercises = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Exercises per sheet")
        .default(config.exercises)
        .interact_text()?;

    config.defaults.allow_negative = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Allow negative numbers in rows?")
        .default(config.defaults.allow_negative)
        .interact()?;

    config.defaults.answer_can_be_negative = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Allow negative answers?")
        .default(config.defaults.answer_can_be_negative)
        .interact()?;

    println!(
        "\n{} Defaults: {}",
        style("✓").green(),
        describe(&config.defaults)
    );

    Ok(())
}
