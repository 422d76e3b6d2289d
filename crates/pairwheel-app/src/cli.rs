use std::path::PathBuf;

use clap::Parser;
use pairwheel_common::ConfigError;
use pairwheel_config::PairwheelConfig;

/// pairwheel: split a group into pairs by spinning a wheel.
#[derive(Parser, Debug)]
#[command(name = "pairwheel", version, about)]
pub struct Args {
    /// People to add after the configured pool.
    pub names: Vec<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for queue shuffles and wheel spins.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Comma-separated names that may not be paired with each other.
    /// Repeat for more groups.
    #[arg(long, value_name = "A,B,...")]
    pub forbid: Vec<String>,

    /// Comma-separated pair announced before any other.
    #[arg(long, value_name = "A,B")]
    pub lock: Option<String>,

    /// Skip the spin animation and the pause between picks.
    #[arg(long)]
    pub fast: bool,

    /// Print session events as JSON lines.
    #[arg(long)]
    pub json: bool,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Read commands from stdin instead of pairing everyone at once.
    #[arg(short, long)]
    pub interactive: bool,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

impl Args {
    /// Fold command-line overrides into a loaded config and validate the
    /// result.
    pub fn apply(&self, config: &mut PairwheelConfig) -> Result<(), ConfigError> {
        if let Some(seed) = self.seed {
            config.session.seed = Some(seed);
        }
        for group in &self.forbid {
            config.constraints.forbidden_groups.push(split_names(group));
        }
        if let Some(lock) = &self.lock {
            match split_names(lock).as_slice() {
                [a, b] => config.constraints.locked_pair = Some([a.clone(), b.clone()]),
                _ => {
                    return Err(ConfigError::ValidationError(format!(
                        "--lock needs exactly two names, got '{lock}'"
                    )))
                }
            }
        }
        if self.fast {
            config.draw.spin_duration_ms = 0;
            config.draw.pick_delay_ms = 0;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        config.pool.names.extend(self.names.iter().cloned());
        pairwheel_config::validation::validate(config)
    }
}

/// Split a comma-separated list, dropping blank entries.
pub fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
