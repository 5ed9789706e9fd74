pub mod cli;

use crate::constants::{DEFAULT_OUTPUT_PATH, FEED_URL};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "quake-map"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Render the past week's earthquakes on a Leaflet map")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = FEED_URL))]
    pub feed_url: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_OUTPUT_PATH))]
    pub output_path: String,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Log CPU and memory usage per phase"))]
    pub monitor: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON lines"))]
    pub json_logs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            feed_url: FEED_URL.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            verbose: false,
            monitor: false,
            json_logs: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn feed_url(&self) -> &str {
        &self.feed_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("feed_url", &self.feed_url)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
