use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wofl_countdown::CountdownEmitter;

#[derive(Parser)]
#[command(name = "wofl-test", version)]
#[command(about = "Print a paced countdown to check that an IDE streams process output")]
struct Cli {}

/// Initialize tracing on stderr; stdout carries only the countdown transcript
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "wofl_countdown=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let report = CountdownEmitter::stdout().run()?;
    tracing::debug!(counts = report.counts, "Exiting");

    Ok(())
}
