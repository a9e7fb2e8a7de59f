use serde::Deserialize;
use web_time::{SystemTime, UNIX_EPOCH};

pub const MAX_LEVEL: u32 = 10;
pub const POINTS_PER_LINE: u32 = 10;

/// Options for a new engine. Accepted from JS as a plain object; missing
/// fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Fixed seed for piece generation. `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
