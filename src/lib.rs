/*
 * Boid Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the boid simulation application.
 * The simulation core (boid, steering, surface, physics) has no dependency on
 * the window; the nannou shell (app, renderer, ui, debug) sits on top of it.
 */

// Re-export key components for easier access
pub use boid::{Boid, BoidState};
pub use config::{Cli, ConfigError, LaunchConfig};
pub use debug::DebugInfo;
pub use params::SimulationParams;
pub use physics::{FlockStats, Neighborhood};
pub use steering::{BoundarySuppression, RandomDraw, SteeringPolicy};
pub use surface::{Canvas, Color, RandomSource, RngSource, Screen, ScreenSize};

// Define modules
pub mod boid;
pub mod steering;
pub mod surface;
pub mod physics;
pub mod params;
pub mod config;
pub mod headless;
pub mod debug;
pub mod app;
pub mod ui;
pub mod renderer;

// Constants
pub const BOID_SIZE: f32 = 3.5;
pub const SCREEN_MARGIN: f32 = BOID_SIZE * 15.0;
pub const MAX_VELOCITY: f32 = 5.0;

pub const BOID_COLOR: Color = Color::RAYWHITE;
pub const PERIMETER_COLOR: Color = Color::GREEN;
pub const BACKGROUND_COLOR: Color = Color::BLACK;
