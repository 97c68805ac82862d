/*
 * Application Module
 *
 * This module defines the main application model and logic for the boid simulation.
 * It handles the initialization and per-frame update of the simulation; drawing
 * lives in the renderer module.
 *
 * Each frame runs exactly one simulation step against the live window size,
 * so resizing the window moves the margins the boids turn back from.
 */

use std::sync::OnceLock;

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::boid::Boid;
use crate::config::LaunchConfig;
use crate::debug::DebugInfo;
use crate::params::SimulationParams;
use crate::physics::{self, FlockStats};
use crate::renderer::view;
use crate::surface::{RngSource, ScreenSize};
use crate::ui;

// nannou's model callback takes no arguments, so the launch config is parked here
static LAUNCH: OnceLock<LaunchConfig> = OnceLock::new();

// Main model for the application
pub struct Model {
    pub boids: Vec<Boid>,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub rng: StdRng,
}

// Start the windowed simulation; blocks until the window closes
pub fn run(launch: LaunchConfig) {
    if LAUNCH.set(launch).is_err() {
        debug!("launch configuration already set, keeping the first one");
    }
    nannou::app(model).update(update).run();
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let launch = LAUNCH.get().cloned().unwrap_or_default();

    let window_id = app
        .new_window()
        .title("Boid Flocking Simulation")
        .size(launch.width, launch.height)
        .view(view)
        .raw_event(raw_window_event)
        .build()
        .expect("Failed to create window");

    let window = app.window(window_id).expect("Window vanished right after creation");

    // Create the UI
    let egui = Egui::from_window(&window);

    let mut rng = match launch.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let params = launch.params;
    let screen = ScreenSize::from_rect(window.rect());
    let mut boids = Vec::with_capacity(params.num_boids);
    physics::reset_boids(&mut boids, params.num_boids, &screen, &mut rng);

    info!(boids = boids.len(), width = screen.width, height = screen.height, "simulation window ready");

    Model {
        boids,
        params,
        egui,
        debug_info: DebugInfo::default(),
        rng,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let response = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    // Queried every frame so the margins follow window resizes
    let screen = ScreenSize::from_rect(app.window_rect());

    if response.reset_boids {
        physics::reset_boids(&mut model.boids, model.params.num_boids, &screen, &mut model.rng);
    } else if response.num_boids_changed {
        physics::resize_boids(&mut model.boids, model.params.num_boids, &screen, &mut model.rng);
    }

    if !model.params.pause_simulation {
        let mut source = RngSource::new(&mut model.rng);
        physics::update_boids(&mut model.boids, &model.params, &screen, &mut source);
        model.debug_info.frames_simulated += 1;
    }

    if model.params.show_debug {
        model.debug_info.stats = FlockStats::from_boids(&model.boids, &screen);
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
