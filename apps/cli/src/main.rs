use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nurture_dashboard::CalendarView;
use serde_json::Value;
use std::path::PathBuf;

mod commands;
mod config;
mod logging;

use commands::SymptomView;
use crate::config::{Config, OutputConfig};

#[derive(Parser)]
#[command(name = "nurture", version, about = "Map exported maternal-health rows to FHIR JSON")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Wrap observation lists in a collection Bundle
    #[arg(long, global = true)]
    bundle: bool,

    /// Print compact JSON
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map one patient row to a Patient
    Patient {
        /// JSON file, or - for stdin
        input: String,
    },
    /// Map one patient row to a Bundle of Patient, RelatedPerson and Coverage
    Profile {
        /// JSON file, or - for stdin
        input: String,
    },
    /// Map health-metric rows to vital-sign observations
    Vitals {
        /// JSON file, or - for stdin
        input: String,

        /// Print dashboard chart series instead
        #[arg(long)]
        charts: bool,
    },
    /// Map symptom-log rows to observations
    Symptoms {
        /// JSON file, or - for stdin
        input: String,

        /// Print symptoms grouped by entry date instead
        #[arg(long, conflicts_with = "calendar")]
        history: bool,

        /// Print a week or month symptom calendar instead
        #[arg(long)]
        calendar: Option<CalendarView>,

        /// Date the calendar is centred on (defaults to today)
        #[arg(long, requires = "calendar")]
        today: Option<String>,
    },
    /// Pregnancy progress from a conception date
    Progress {
        #[arg(long)]
        conception_date: String,

        /// Defaults to today
        #[arg(long)]
        today: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    let _logging_guard =
        logging::init_logging(&config.logging).context("Failed to initialize logging")?;

    let mut output = config.output.clone();
    output.bundle |= cli.bundle;
    if cli.compact {
        output.pretty = false;
    }

    let value = run(cli.command, &output)?;
    print_json(&value, &output)
}

fn run(command: Commands, output: &OutputConfig) -> Result<Value> {
    match command {
        Commands::Patient { input } => commands::patient(&commands::read_input(&input)?),
        Commands::Profile { input } => commands::profile(&commands::read_input(&input)?),
        Commands::Vitals { input, charts } => {
            commands::vitals(&commands::read_input(&input)?, charts, output.bundle)
        }
        Commands::Symptoms {
            input,
            history,
            calendar,
            today,
        } => {
            let view = match (history, calendar) {
                (true, _) => SymptomView::History,
                (false, Some(view)) => SymptomView::Calendar {
                    view,
                    today: commands::resolve_today(today.as_deref())?,
                },
                (false, None) => SymptomView::Observations {
                    bundle: output.bundle,
                },
            };
            commands::symptoms(&commands::read_input(&input)?, view)
        }
        Commands::Progress {
            conception_date,
            today,
        } => commands::progress(&conception_date, commands::resolve_today(today.as_deref())?),
    }
}

fn print_json(value: &Value, output: &OutputConfig) -> Result<()> {
    let text = if output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}
