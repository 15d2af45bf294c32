use std::process::ExitCode;

use clap::Parser;
use hcap_cli::cli::{Cli, Commands};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

mod commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("setting default subscriber failed: {err}");
        return ExitCode::FAILURE;
    }

    let result = match &cli.command {
        Some(Commands::Run {
            config,
            threshold,
            feeder,
            format,
        }) => commands::run::handle(config, *threshold, feeder, *format),
        Some(Commands::Feeders {
            config,
            threshold,
            format,
        }) => commands::query::feeders(config, *threshold, *format),
        Some(Commands::Der {
            config,
            feeder,
            format,
        }) => commands::query::der(config, feeder, *format),
        Some(Commands::Validate { config }) => commands::validate::handle(config),
        None => {
            info!("No subcommand provided. Use `hcap-cli --help` for more information.");
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
