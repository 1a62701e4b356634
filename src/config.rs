//! Runtime configuration from environment variables.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `TERMTRIS_LOG_PATH` | JSONL event log file | disabled |
//! | `TERMTRIS_SEED` | bag shuffle seed (`u64`) | random |
//! | `TERMTRIS_TICK_US` | sleep between loop iterations, microseconds | 100 |

use std::env;
use std::time::Duration;

use crate::types::tuning::TICK_SLEEP_US;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_path: Option<String>,
    pub seed: Option<u64>,
    pub tick: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: None,
            seed: None,
            tick: Duration::from_micros(TICK_SLEEP_US),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_path = lookup("TERMTRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let seed = lookup("TERMTRIS_SEED").and_then(|s| s.trim().parse().ok());

        let tick_us = lookup("TERMTRIS_TICK_US")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(TICK_SLEEP_US);

        Self {
            log_path,
            seed,
            tick: Duration::from_micros(tick_us),
        }
    }
}
