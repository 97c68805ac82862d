/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the boid simulation. These parameters can be
 * modified through the UI or loaded from a JSON config file. It also provides
 * methods for parameter change detection so the UI knows when to respawn boids.
 */

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ConfigError;
use crate::steering::SteeringPolicy;

// Parameters for the simulation that can be adjusted via UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub num_boids: usize,
    pub avoid_factor: f32,
    pub align_factor: f32,
    pub cohesion_factor: f32,
    pub protected_range: f32,
    pub visual_range: f32,
    pub steering: SteeringPolicy,
    pub show_debug: bool,
    pub pause_simulation: bool,
    // Performance settings
    pub enable_parallel: bool,

    // Internal state for tracking changes
    #[serde(skip)]
    pub(crate) previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ParamSnapshot {
    num_boids: usize,
    avoid_factor: f32,
    align_factor: f32,
    cohesion_factor: f32,
    protected_range: f32,
    visual_range: f32,
    steering: SteeringPolicy,
    show_debug: bool,
    pause_simulation: bool,
    enable_parallel: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_boids: 100,
            avoid_factor: 0.05,
            align_factor: 0.05,
            cohesion_factor: 0.0005,
            protected_range: 8.0,
            visual_range: 40.0,
            steering: SteeringPolicy::default(),
            show_debug: false,
            pause_simulation: false,
            enable_parallel: true,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let params = Self::from_json_str(&text)?;
        debug!(path = %path.display(), num_boids = params.num_boids, "loaded simulation parameters");
        Ok(params)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let params: Self = serde_json::from_str(text)?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // Driver-level sanity checks; the boids themselves accept anything
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            ("avoid_factor", self.avoid_factor),
            ("align_factor", self.align_factor),
            ("cohesion_factor", self.cohesion_factor),
        ];
        for (name, value) in factors {
            if !value.is_finite() {
                return Err(ConfigError::invalid(name, "must be finite"));
            }
        }

        let ranges = [
            ("protected_range", self.protected_range),
            ("visual_range", self.visual_range),
        ];
        for (name, value) in ranges {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(name, "must be a finite, non-negative distance"));
            }
        }

        if self.protected_range > self.visual_range {
            return Err(ConfigError::invalid(
                "protected_range",
                "must not exceed visual_range",
            ));
        }

        Ok(())
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            num_boids: self.num_boids,
            avoid_factor: self.avoid_factor,
            align_factor: self.align_factor,
            cohesion_factor: self.cohesion_factor,
            protected_range: self.protected_range,
            visual_range: self.visual_range,
            steering: self.steering,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
            enable_parallel: self.enable_parallel,
        });
    }

    // Check if any parameters have changed since the last snapshot
    // Returns a tuple of (num_boids_changed, any_ui_changed)
    pub fn detect_changes(&self) -> (bool, bool) {
        let mut num_boids_changed = false;
        let mut ui_changed = false;

        // If we don't have previous values, nothing has changed
        if let Some(prev) = &self.previous_values {
            if self.num_boids != prev.num_boids {
                num_boids_changed = true;
                ui_changed = true;
            }

            if self.avoid_factor != prev.avoid_factor
                || self.align_factor != prev.align_factor
                || self.cohesion_factor != prev.cohesion_factor
                || self.protected_range != prev.protected_range
                || self.visual_range != prev.visual_range
                || self.steering != prev.steering
                || self.show_debug != prev.show_debug
                || self.pause_simulation != prev.pause_simulation
                || self.enable_parallel != prev.enable_parallel
            {
                ui_changed = true;
            }
        }

        (num_boids_changed, ui_changed)
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_boids_range() -> std::ops::RangeInclusive<usize> {
        1..=2000
    }

    pub fn get_avoid_factor_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.5
    }

    pub fn get_align_factor_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1.0
    }

    pub fn get_cohesion_factor_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.01
    }

    pub fn get_range_range() -> std::ops::RangeInclusive<f32> {
        0.0..=200.0
    }
}
