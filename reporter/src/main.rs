use clap::Parser;
use reporter::{run, Cli, RunOutcome, Settings};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::resolve(cli)?;

    info!("Running robot-qase-reporter");

    match run(&settings).await? {
        RunOutcome::Submitted(summary) => {
            info!("Done, test run ID: {}", summary.run_id);
        }
        RunOutcome::Empty => {
            info!("Done, nothing to report");
        }
        RunOutcome::DryRun { results } => {
            info!("Dry run, {} results not reported", results);
        }
    }

    Ok(())
}
