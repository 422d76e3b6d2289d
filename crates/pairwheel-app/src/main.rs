//! pairwheel: pair people up by spinning a wheel.
//!
//! Loads the config, folds in command-line overrides, then either pairs
//! everyone in one go or hands control to a small stdin shell.

mod cli;
mod commands;
mod shell;

use std::process::ExitCode;

use pairwheel_common::{PairwheelError, SessionEvent};
use pairwheel_config::PairwheelConfig;
use pairwheel_engine::{PairingSession, WheelDraw, WheelSettings};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    let config = match load(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("pairwheel: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(args.log_level.as_deref(), &config.logging.level);
    tracing::info!("pairwheel v{} starting", env!("CARGO_PKG_VERSION"));

    if args.print_config {
        println!("{}", pairwheel_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    match run(&args, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("pairwheel: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load(args: &cli::Args) -> Result<PairwheelConfig, PairwheelError> {
    if let Some(path) = &args.config {
        eprintln!("pairwheel: using config {}", path.display());
    }
    let mut config = pairwheel_config::load_config(args.config.as_deref())?;
    args.apply(&mut config)?;
    Ok(config)
}

/// An explicit `--log-level` wins, then `RUST_LOG`, then the config file.
fn init_logging(explicit: Option<&str>, configured: &str) {
    let filter = match explicit {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: &cli::Args, config: &PairwheelConfig) -> Result<(), PairwheelError> {
    let mut session = PairingSession::from_config(config)?;
    let mut wheel = WheelDraw::new(WheelSettings::from_config(&config.draw, config.session.seed));
    tracing::info!(
        session = %session.id(),
        pool = session.pool().len(),
        pairs = session.queue().len(),
        "session ready"
    );

    let printer = args.json.then(|| spawn_event_printer(session.subscribe()));

    let result = if args.interactive {
        shell::run_interactive(&mut session, &mut wheel).await
    } else {
        shell::run_once(&mut session, &mut wheel, args.json).await
    };

    // Dropping the session closes the event channel so the printer exits.
    drop(session);
    if let Some(printer) = printer {
        if let Err(e) = printer.await {
            tracing::warn!("event printer failed: {e}");
        }
    }
    result
}

fn spawn_event_printer(mut rx: broadcast::Receiver<SessionEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => match serde_json::to_string(&event) {
                    Ok(line) => println!("{line}"),
                    Err(e) => tracing::warn!("failed to encode event: {e}"),
                },
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "event printer fell behind");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}
