#![forbid(unsafe_code)]
//! Abacus Drill Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use abacus::commands::{
    execute_generate, execute_init, execute_presets, ConstraintOverrides, GenerateOptions,
    InitOptions,
};
use abacus::config::{Config, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "abacus")]
#[command(about = "Abacus Drill - constrained random rows for arithmetic exercises")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter config file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Exercises per sheet
        #[arg(short = 'n', long)]
        exercises: Option<usize>,

        /// Skip interactive prompts (use defaults + CLI args)
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Print a sheet of exercises
    Generate {
        /// Preset from the config file
        #[arg(short, long)]
        preset: Option<String>,

        /// Number of exercises to print
        #[arg(short = 'n', long)]
        exercises: Option<usize>,

        /// Numbers per exercise (excluding trailing values)
        #[arg(long)]
        count: Option<i64>,

        /// Largest absolute value of a generated number
        #[arg(long)]
        max_magnitude: Option<i64>,

        /// Largest allowed answer
        #[arg(long)]
        max_sum: Option<i64>,

        /// Only generate positive numbers
        #[arg(long)]
        no_negative: bool,

        /// Allow the answer to be negative
        #[arg(long)]
        negative_answer: bool,

        /// Value appended to every exercise (repeatable)
        #[arg(long = "trailing", allow_negative_numbers = true)]
        trailing: Vec<i64>,

        /// Digit count of the first number
        #[arg(long)]
        leading_digits: Option<u32>,

        /// Largest digit allowed in the first number
        #[arg(long)]
        leading_cap: Option<i64>,

        /// Largest digit allowed in the answer
        #[arg(long)]
        sum_cap: Option<i64>,

        /// Seed for a reproducible sheet
        #[arg(long, env = "ABACUS_SEED")]
        seed: Option<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List configured presets
    Presets {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config
    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };

    match cli.command {
        Commands::Init { force, exercises, yes } => {
            let options = InitOptions {
                path: cli.config,
                force,
                exercises,
                yes,
            };
            execute_init(options)?;
        }

        Commands::Generate {
            preset,
            exercises,
            count,
            max_magnitude,
            max_sum,
            no_negative,
            negative_answer,
            trailing,
            leading_digits,
            leading_cap,
            sum_cap,
            seed,
            json,
        } => {
            let overrides = ConstraintOverrides {
                count,
                max_magnitude,
                max_sum,
                no_negative,
                negative_answer,
                trailing,
                leading_digits,
                leading_cap,
                sum_cap,
            };
            let options = GenerateOptions {
                preset,
                exercises,
                overrides,
                seed,
                json,
            };
            if let Err(e) = execute_generate(options, &config) {
                eprintln!("{} {}", style("✗").red(), e);
                std::process::exit(1);
            }
        }

        Commands::Presets { json } => {
            execute_presets(&config, json)?;
        }
    }

    Ok(())
}
