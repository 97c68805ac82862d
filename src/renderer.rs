/*
 * Renderer Module
 *
 * This module handles the rendering of the boid simulation.
 * Boids live in screen pixels with the origin at the top-left corner and y
 * pointing down; nannou draws around the window center with y pointing up.
 * NannouCanvas converts between the two.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::surface::{Canvas, Color};
use crate::ui;
use crate::{BACKGROUND_COLOR, PERIMETER_COLOR, SCREEN_MARGIN};

pub struct NannouCanvas<'a> {
    draw: &'a Draw,
    window_rect: Rect,
}

impl<'a> NannouCanvas<'a> {
    pub fn new(draw: &'a Draw, window_rect: Rect) -> Self {
        Self { draw, window_rect }
    }

    // Top-left pixel coordinates to nannou's centered frame
    pub fn to_frame(&self, x: f32, y: f32) -> Point2 {
        pt2(self.window_rect.left() + x, self.window_rect.top() - y)
    }
}

fn to_rgb(color: Color) -> Rgb<u8> {
    rgb(color.r, color.g, color.b)
}

impl Canvas for NannouCanvas<'_> {
    fn draw_circle(&mut self, x: i32, y: i32, radius: f32, color: Color) {
        self.draw
            .ellipse()
            .xy(self.to_frame(x as f32, y as f32))
            .radius(radius)
            .color(to_rgb(color));
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(to_rgb(BACKGROUND_COLOR));

    let window_rect = app.window_rect();
    let mut canvas = NannouCanvas::new(&draw, window_rect);

    for boid in &model.boids {
        boid.draw(&mut canvas);
    }

    if model.params.show_debug {
        draw_perimeter(&draw, window_rect);

        // Perception ranges of the first boid
        if let Some(first) = model.boids.first() {
            let center = canvas.to_frame(first.xpos() as f32, first.ypos() as f32);

            draw.ellipse()
                .xy(center)
                .radius(model.params.protected_range)
                .no_fill()
                .stroke(RED)
                .stroke_weight(1.0);

            draw.ellipse()
                .xy(center)
                .radius(model.params.visual_range)
                .no_fill()
                .stroke(BLUE)
                .stroke_weight(1.0);

            // Velocity vector, y flipped into nannou's frame
            draw.arrow()
                .start(center)
                .end(pt2(center.x + first.xvel() * 5.0, center.y - first.yvel() * 5.0))
                .color(YELLOW)
                .stroke_weight(2.0);
        }

        ui::draw_debug_info(&draw, &model.debug_info, window_rect);
    }

    // Finish drawing
    if let Err(err) = draw.to_frame(app, &frame) {
        tracing::warn!(?err, "failed to draw frame");
    }

    // Draw the egui UI
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        tracing::warn!(?err, "failed to draw ui");
    }
}

// Outline of the area where boundary steering kicks in
fn draw_perimeter(draw: &Draw, window_rect: Rect) {
    let inner_w = window_rect.w() - 2.0 * SCREEN_MARGIN;
    let inner_h = window_rect.h() - 2.0 * SCREEN_MARGIN;
    if inner_w <= 0.0 || inner_h <= 0.0 {
        return;
    }

    draw.rect()
        .xy(window_rect.xy())
        .w_h(inner_w, inner_h)
        .no_fill()
        .stroke(to_rgb(PERIMETER_COLOR))
        .stroke_weight(1.0);
}
