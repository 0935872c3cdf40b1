//! API Configuration
//!
//! Where the players collection lives. The only setting is the base URL.

use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;

/// Puppy Bowl API root, one collection per cohort
pub const PUPPY_BOWL_API: &str = "https://fsa-puppy-bowl.herokuapp.com/api";

/// Cohort used when nothing else is configured
pub const DEFAULT_COHORT: &str = "2308-acc-et-web-pt-a";

/// Remote collection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::for_cohort(DEFAULT_COHORT)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn for_cohort(cohort: &str) -> Self {
        Self::new(format!("{}/{}", PUPPY_BOWL_API, cohort))
    }

    /// Base URL baked in at build time via `ROSTER_API_URL`, else the default cohort.
    /// WASM builds have no process environment, so this is read by the compiler.
    pub fn from_env() -> Self {
        match option_env!("ROSTER_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn players_url(&self) -> String {
        format!("{}/players", self.base_url.trim_end_matches('/'))
    }

    pub fn player_url(&self, id: PlayerId) -> String {
        format!("{}/{}", self.players_url(), id)
    }
}
