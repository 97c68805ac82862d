/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides controls for adjusting simulation parameters
 * and draws the on-screen debug panel.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;
use crate::steering::{BoundarySuppression, RandomDraw};

// Outcome of one UI frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiResponse {
    pub reset_boids: bool,
    pub num_boids_changed: bool,
    pub ui_changed: bool,
}

// Update the UI and report what the user asked for
pub fn update_ui(egui: &mut Egui, params: &mut SimulationParams, debug_info: &DebugInfo) -> UiResponse {
    let mut reset_boids = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.add(egui::Slider::new(&mut params.num_boids, SimulationParams::get_num_boids_range()).text("Number of Boids"));

                if ui.button("Reset Boids").clicked() {
                    reset_boids = true;
                }
            });

            ui.collapsing("Flocking Behavior", |ui| {
                ui.add(egui::Slider::new(&mut params.avoid_factor, SimulationParams::get_avoid_factor_range()).text("Avoid Factor"));
                ui.add(egui::Slider::new(&mut params.align_factor, SimulationParams::get_align_factor_range()).text("Align Factor"));
                ui.add(egui::Slider::new(&mut params.cohesion_factor, SimulationParams::get_cohesion_factor_range()).text("Cohesion Factor"));
                ui.add(egui::Slider::new(&mut params.protected_range, SimulationParams::get_range_range()).text("Protected Range"));
                ui.add(egui::Slider::new(&mut params.visual_range, SimulationParams::get_range_range()).text("Visual Range"));
            });

            ui.collapsing("Random Steering", |ui| {
                ui.label("Rolls per axis");
                ui.radio_value(&mut params.steering.random_draw, RandomDraw::Literal, "Two rolls (classic)");
                ui.radio_value(&mut params.steering.random_draw, RandomDraw::SingleDraw, "One roll");

                ui.separator();

                ui.label("Boundary contact silences");
                ui.radio_value(&mut params.steering.suppression, BoundarySuppression::Shared, "Both axes (classic)");
                ui.radio_value(&mut params.steering.suppression, BoundarySuppression::PerAxis, "Own axis only");
            });

            ui.collapsing("Performance", |ui| {
                ui.checkbox(&mut params.enable_parallel, "Parallel Neighbor Scan");

                ui.separator();

                for line in debug_info.lines() {
                    ui.label(line);
                }
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    // Sliders can push protected past visual; keep the pair ordered
    if params.protected_range > params.visual_range {
        params.visual_range = params.protected_range;
    }

    let (num_boids_changed, ui_changed) = params.detect_changes();

    UiResponse {
        reset_boids,
        num_boids_changed,
        ui_changed,
    }
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect) {
    let margin = 20.0;
    let line_height = 20.0;
    let lines = debug_info.lines();

    // Create a background panel in the top-right corner
    let panel_width = 200.0;
    let panel_height = line_height * lines.len() as f32 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.right() - panel_width + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
