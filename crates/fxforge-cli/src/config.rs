//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! FXForge deliberately reads no config files and no environment variables
//! for behavior — the current working directory is the sole output root.
//! This type carries the built-in defaults the output layer consumes, and
//! gives a future file/env layer a place to slot in without touching
//! call-sites.

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                no_color: false,
                format: "human".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration: always the built-in defaults.
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self::default())
    }
}
