//! Console entry point.

use std::process::ExitCode;

use cli::{Config, SessionOutcome};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> ExitCode {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    init_tracing(&config);

    // 2. Run the booking session
    match cli::run(&config) {
        Ok(SessionOutcome::Booked(booking_id)) => {
            tracing::info!(%booking_id, "session finished with a booking");
            ExitCode::SUCCESS
        }
        Ok(outcome) => {
            tracing::info!(?outcome, "session finished without a booking");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "session failed");
            eprintln!("\nerror: {err}");
            ExitCode::FAILURE
        }
    }
}
