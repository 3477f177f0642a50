//! MentorSim - mentoring center simulator
//!
//! CLI entry point: run one simulation and print the progress log plus a
//! final summary.

use std::sync::Arc;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use mentorsim::center::{CenterParams, CenterReport, Controller, Delay, RandomDelay};
use mentorsim::cli::{Cli, OutputFormat};
use mentorsim::config::Config;
use mentorsim::events::{create_event_bus, spawn_console_logger};

fn setup_logging(verbose: bool) -> Result<()> {
    // Diagnostics go to stderr; stdout belongs to the progress log
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to initialize logging: {}", e))?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose)?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    let params = CenterParams {
        students: cli.students,
        tutors: cli.tutors,
        chairs: cli.chairs,
        helps: cli.helps,
    };

    let events = create_event_bus();
    let logger = spawn_console_logger(events.clone());

    let delay: Arc<dyn Delay> = Arc::new(RandomDelay::from_config(&config.delays));
    let report = Controller::new(params, config.channels, events.clone(), delay)
        .run()
        .await?;

    // Dropping the last bus handle closes the logger's subscription
    drop(events);
    let _ = logger.await;

    info!("simulation complete");
    print_summary(&report, &cli.format)?;

    Ok(())
}

/// Print the final counters in the requested format
fn print_summary(report: &CenterReport, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Text => {
            println!();
            println!("Simulation finished.");
            println!(
                "  Students: {}  Tutors: {}  Chairs: {}  Helps: {}",
                report.students, report.tutors, report.chairs, report.helps
            );
            println!("  Total requests:   {}", report.total_requests);
            println!("  Sessions tutored: {}", report.sessions_tutored);
        }
    }

    Ok(())
}
