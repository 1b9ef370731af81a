use std::env;

use log::warn;
use once_cell::sync::Lazy;

/// Environment variable holding the destination cap.
pub const MAX_DESTINATIONS_VAR: &str = "TSP3D_MAX_DESTINATIONS";

/// Largest destination count accepted unless overridden. 12! orderings is
/// already several seconds of work.
pub const DEFAULT_MAX_DESTINATIONS: usize = 12;

/// Process-wide configuration, read from the environment on first use.
pub static CONFIG: Lazy<EngineConfig> = Lazy::new(EngineConfig::from_env);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// `None` disables the cap.
    pub max_destinations: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_destinations: Some(DEFAULT_MAX_DESTINATIONS),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        let raw = env::var(MAX_DESTINATIONS_VAR).ok();
        Self::from_raw(raw.as_deref())
    }

    fn from_raw(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match parse_max_destinations(raw) {
            Some(max_destinations) => EngineConfig { max_destinations },
            None => {
                warn!(
                    "ignoring {}={:?}; expected a count or \"none\"",
                    MAX_DESTINATIONS_VAR, raw
                );
                Self::default()
            }
        }
    }
}

/// `Some(None)` means the cap is disabled; `None` means the value is unusable.
fn parse_max_destinations(raw: &str) -> Option<Option<usize>> {
    let value = raw.trim();
    if ["none", "off"].iter().any(|v| value.eq_ignore_ascii_case(v)) {
        return Some(None);
    }
    match value.parse::<usize>() {
        Ok(0) => Some(None),
        Ok(n) => Some(Some(n)),
        Err(_) => None,
    }
}
