//! Store configuration.

use tracing::warn;

/// Runtime knobs for [`MemStorage`](crate::lifecycle::MemStorage).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Capacity of each actor's request channel. Senders wait when it is full.
    pub buffer_size: usize,
    /// Populate the demo catalogue at startup.
    pub seed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            seed: true,
        }
    }
}

impl StoreConfig {
    pub const BUFFER_SIZE_VAR: &'static str = "STORE_BUFFER_SIZE";
    pub const SEED_VAR: &'static str = "STORE_SEED";

    /// Reads `STORE_BUFFER_SIZE` and `STORE_SEED`, keeping the default for anything unset
    /// or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(Self::BUFFER_SIZE_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.buffer_size = size,
                _ => warn!(
                    var = Self::BUFFER_SIZE_VAR,
                    value = %raw,
                    default = config.buffer_size,
                    "Ignoring invalid buffer size"
                ),
            }
        }

        if let Some(raw) = lookup(Self::SEED_VAR) {
            match raw.trim().parse::<bool>() {
                Ok(seed) => config.seed = seed,
                Err(_) => warn!(
                    var = Self::SEED_VAR,
                    value = %raw,
                    default = config.seed,
                    "Ignoring invalid seed flag"
                ),
            }
        }

        config
    }
}
