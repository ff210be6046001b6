use std::process::ExitCode;

use itinerary::organizer::OrganizerConfig;
use itinerary::pipeline;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = std::env::args_os().nth(1) else {
        eprintln!("Usage: itinerary <input-file>");
        return ExitCode::FAILURE;
    };

    let config = match OrganizerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if config.base.is_none() {
        tracing::warn!("BASED not set, trips are titled by destination");
    }

    match pipeline::run(&path, &config) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
