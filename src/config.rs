//! Command line and launch configuration.
//!
//! The CLI picks the window size, the random seed and an optional JSON
//! parameter file. Explicit flags win over values from the file.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::info;

use crate::params::SimulationParams;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl ConfigError {
    pub fn invalid(name: &str, reason: &str) -> Self {
        ConfigError::InvalidParameter {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "boid-flock")]
#[command(about = "Boid flocking simulation with margin steering and random wandering", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON file with simulation parameters
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of boids (overrides the config file)
    #[arg(short = 'n', long)]
    pub boids: Option<usize>,

    /// Seed for the random generator; entropy when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Run this many frames without a window and print flock statistics
    #[arg(long, value_name = "FRAMES")]
    pub headless: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

/// Everything the app or the headless runner needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchConfig {
    pub params: SimulationParams,
    pub seed: Option<u64>,
    pub width: u32,
    pub height: u32,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            params: SimulationParams::default(),
            seed: None,
            width: 800,
            height: 600,
        }
    }
}

impl Cli {
    pub fn into_launch(self) -> Result<LaunchConfig, ConfigError> {
        let mut params = match &self.config {
            Some(path) => SimulationParams::load(path)?,
            None => SimulationParams::default(),
        };

        if let Some(boids) = self.boids {
            params.num_boids = boids;
        }
        params.validate()?;

        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::invalid("window", "width and height must be positive"));
        }

        info!(
            num_boids = params.num_boids,
            width = self.width,
            height = self.height,
            seed = ?self.seed,
            "launch configuration ready"
        );

        Ok(LaunchConfig {
            params,
            seed: self.seed,
            width: self.width,
            height: self.height,
        })
    }
}
