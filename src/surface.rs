/*
 * Surface Module
 *
 * The boid core never talks to the window, the random generator or the
 * renderer directly. It goes through the three small traits defined here,
 * which the application implements on top of nannou and rand.
 */

use nannou::geom::Rect;
use rand::Rng;

// Viewport dimensions in pixels, read fresh on every boid update
pub trait Screen {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
}

// Uniform random integer in the inclusive range [min, max]
pub trait RandomSource {
    fn random_value(&mut self, min: i32, max: i32) -> i32;
}

// Anything a boid can be painted onto
pub trait Canvas {
    fn draw_circle(&mut self, x: i32, y: i32, radius: f32, color: Color);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const RAYWHITE: Color = Color::new(245, 245, 245);
    pub const GREEN: Color = Color::new(0, 228, 48);
    pub const BLACK: Color = Color::new(0, 0, 0);
}

// Fixed-size screen, used by the headless runner and built from the window rect each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

impl ScreenSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self {
            width: rect.w() as i32,
            height: rect.h() as i32,
        }
    }
}

impl Screen for ScreenSize {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }
}

/// Adapts any `rand` generator to [`RandomSource`].
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn random_value(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}
