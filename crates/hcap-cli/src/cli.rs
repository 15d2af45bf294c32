use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info", global = true)]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run every layer and print each stage followed by the two example queries
    Run {
        /// Pipeline file listing the utility sources
        #[arg(long, default_value = "pipeline.yaml", value_hint = ValueHint::FilePath)]
        config: PathBuf,
        /// Capacity threshold for the feeder query
        #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
        threshold: f64,
        /// Feeder identifier for the DER query
        #[arg(long, default_value = "feeder123")]
        feeder: String,
        /// How tables are written to stdout
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Feeders whose hosting capacity is strictly above a threshold
    Feeders {
        #[arg(long, default_value = "pipeline.yaml", value_hint = ValueHint::FilePath)]
        config: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        threshold: f64,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Installed and planned DER attached to one feeder
    Der {
        #[arg(long, default_value = "pipeline.yaml", value_hint = ValueHint::FilePath)]
        config: PathBuf,
        #[arg(long)]
        feeder: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Check a pipeline file and that every file it names exists
    Validate {
        #[arg(long, default_value = "pipeline.yaml", value_hint = ValueHint::FilePath)]
        config: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// Comma-separated values with a header row
    Csv,
}
