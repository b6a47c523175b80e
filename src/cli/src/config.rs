use std::path::Path;

use magic_cube::{ScrambleConfig, SearchConfig, SolverConfig};
use serde::{Deserialize, Serialize};

/// Settings read from the `--config` file. Every section and key may be
/// left out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub scramble: ScrambleConfig,
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> color_eyre::Result<AppConfig> {
        let Some(path) = path else {
            return Ok(AppConfig::default());
        };
        Ok(toml::from_str::<AppConfig>(&std::fs::read_to_string(path)?)?)
    }

    #[must_use]
    pub fn solver(&self) -> SolverConfig {
        SolverConfig {
            search: self.search,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.scramble.seed = seed;
        }
        self
    }

    #[must_use]
    pub fn with_length(mut self, length: Option<usize>) -> Self {
        if let Some(length) = length {
            self.scramble.length = length;
        }
        self
    }

    #[must_use]
    pub fn with_node_limit(mut self, node_limit: Option<usize>) -> Self {
        if let Some(node_limit) = node_limit {
            self.search = self.search.with_node_limit(node_limit);
        }
        self
    }

    #[must_use]
    pub fn without_dedup(mut self, no_dedup: bool) -> Self {
        if no_dedup {
            self.search = self.search.with_deduplicate(false);
        }
        self
    }
}
