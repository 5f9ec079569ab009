//! Run configuration: bucket width, source vertex and the infinity sentinel.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SsspError};

pub const DEFAULT_DELTA: u64 = 5;
pub const DEFAULT_SOURCE: u32 = 0;
pub const DEFAULT_INFINITY: u64 = 999_999_999;

/// Parameters of one delta-stepping run.
///
/// `infinity` is only an output sentinel; it must exceed every real distance
/// in the graph, which the driver checks when the run finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeltaSteppingConfig {
    /// Bucket width and light/heavy threshold.
    pub delta: u64,
    pub source: u32,
    pub infinity: u64,
}

impl Default for DeltaSteppingConfig {
    fn default() -> Self {
        Self { delta: DEFAULT_DELTA, source: DEFAULT_SOURCE, infinity: DEFAULT_INFINITY }
    }
}

impl DeltaSteppingConfig {
    pub fn with_delta(mut self, delta: u64) -> Self { self.delta = delta; self }
    pub fn with_source(mut self, source: u32) -> Self { self.source = source; self }
    pub fn with_infinity(mut self, infinity: u64) -> Self { self.infinity = infinity; self }

    /// Parse a JSON object; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Defaults overridden by `SSSP_DELTA`, `SSSP_SOURCE` and `SSSP_INFINITY`.
    ///
    /// Unparsable values are ignored with a warning, like the other `SSSP_*` knobs.
    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(v) = env_override("SSSP_DELTA") { cfg.delta = v; }
        if let Some(v) = env_override("SSSP_SOURCE") { cfg.source = v; }
        if let Some(v) = env_override("SSSP_INFINITY") { cfg.infinity = v; }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.delta == 0 {
            return Err(SsspError::NonPositiveDelta);
        }
        if self.infinity == 0 {
            return Err(SsspError::InvalidArgument("infinity sentinel must be positive".into()));
        }
        Ok(())
    }
}

fn env_override<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable environment override");
            None
        }
    }
}
