//! Runtime settings for the tour.
//!
//! Everything has a sensible default so the binary runs with no file
//! present. An optional `whirlwind.json` next to the executable can
//! override any field, most usefully `exercise_network` to actually fire
//! the CRUD routines against the demo API.

use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_RESOLVE_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api_base_url: String,
    pub resolve_delay_ms: u64,
    pub exercise_network: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            resolve_delay_ms: DEFAULT_RESOLVE_DELAY_MS,
            exercise_network: false,
        }
    }
}

impl Settings {
    /// Load settings from `whirlwind.json` when present, falling back to
    /// the defaults above for anything unspecified.
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("resolve_delay_ms", DEFAULT_RESOLVE_DELAY_MS)?
            .set_default("exercise_network", false)?
            .add_source(config::File::with_name("whirlwind").required(false))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
