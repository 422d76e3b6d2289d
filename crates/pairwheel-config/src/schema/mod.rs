//! Configuration schema types for pairwheel.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod constraints;
mod draw;
mod session;

pub use constraints::*;
pub use draw::*;
pub use session::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PairwheelConfig {
    pub constraints: ConstraintsConfig,
    pub pool: PoolConfig,
    pub draw: DrawConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}
