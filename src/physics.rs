/*
 * Physics Module
 *
 * This module drives the flock one frame at a time. For every boid it scans
 * all other boids, sums up what the neighbors contribute to separation,
 * alignment and cohesion, and then hands those sums to the boid.
 *
 * The frame runs in two passes:
 * - gather: read-only, every boid's neighborhood is computed from the same
 *   snapshot of the flock (optionally in parallel)
 * - apply: sequential, in index order, so random draws stay in a fixed order
 *
 * There is no spatial partitioning; the gather is O(n^2).
 */

use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::boid::Boid;
use crate::params::SimulationParams;
use crate::surface::{RandomSource, Screen};
use crate::{MAX_VELOCITY, SCREEN_MARGIN};

/// What one boid sees of the rest of the flock in a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Neighborhood {
    // Sum of (self - other) over boids inside the protected range
    pub move_x: i32,
    pub move_y: i32,
    pub crowding: usize,
    // Sums over boids inside the visual range but outside the protected range
    pub xvel_sum: f32,
    pub yvel_sum: f32,
    pub xpos_sum: f32,
    pub ypos_sum: f32,
    pub neighbors: usize,
}

impl Neighborhood {
    pub fn average_velocity(&self) -> Option<(f32, f32)> {
        if self.neighbors == 0 {
            return None;
        }
        let n = self.neighbors as f32;
        Some((self.xvel_sum / n, self.yvel_sum / n))
    }

    pub fn average_position(&self) -> Option<(f32, f32)> {
        if self.neighbors == 0 {
            return None;
        }
        let n = self.neighbors as f32;
        Some((self.xpos_sum / n, self.ypos_sum / n))
    }
}

// Scan the whole flock for the boid at `index`
pub fn gather_neighborhood(index: usize, boids: &[Boid], params: &SimulationParams) -> Neighborhood {
    let mut hood = Neighborhood::default();
    let boid = &boids[index];

    // Pre-calculate squared radii
    let protected_sq = (params.protected_range as f64).powi(2);
    let visual_sq = (params.visual_range as f64).powi(2);

    for (i, other) in boids.iter().enumerate() {
        if i == index {
            continue;
        }

        let dx = boid.xpos() as i64 - other.xpos() as i64;
        let dy = boid.ypos() as i64 - other.ypos() as i64;
        // f64 so far-apart boids cannot overflow the square
        let d_squared = (dx as f64).powi(2) + (dy as f64).powi(2);

        if d_squared < protected_sq {
            hood.move_x = hood.move_x.saturating_add(dx.clamp(i32::MIN as i64, i32::MAX as i64) as i32);
            hood.move_y = hood.move_y.saturating_add(dy.clamp(i32::MIN as i64, i32::MAX as i64) as i32);
            hood.crowding += 1;
        } else if d_squared < visual_sq {
            hood.xvel_sum += other.xvel();
            hood.yvel_sum += other.yvel();
            hood.xpos_sum += other.xpos() as f32;
            hood.ypos_sum += other.ypos() as f32;
            hood.neighbors += 1;
        }
    }

    hood
}

// Read-only pass over the whole flock
pub fn gather_all(boids: &[Boid], params: &SimulationParams) -> Vec<Neighborhood> {
    if params.enable_parallel {
        (0..boids.len())
            .into_par_iter()
            .map(|i| gather_neighborhood(i, boids, params))
            .collect()
    } else {
        (0..boids.len())
            .map(|i| gather_neighborhood(i, boids, params))
            .collect()
    }
}

// Advance the whole flock by one frame
pub fn update_boids<S, R>(boids: &mut [Boid], params: &SimulationParams, screen: &S, rng: &mut R)
where
    S: Screen + ?Sized,
    R: RandomSource + ?Sized,
{
    let neighborhoods = gather_all(boids, params);

    for (boid, hood) in boids.iter_mut().zip(neighborhoods.iter()) {
        boid.apply_separation(params.avoid_factor, hood.move_x, hood.move_y);

        if let Some((avg_xvel, avg_yvel)) = hood.average_velocity() {
            boid.apply_alignment(params.align_factor, avg_xvel, avg_yvel);
        }
        if let Some((avg_xpos, avg_ypos)) = hood.average_position() {
            boid.apply_cohesion(params.cohesion_factor, avg_xpos, avg_ypos);
        }

        boid.update_with(screen, rng, &params.steering);
    }

    trace!(boids = boids.len(), "flock stepped");
}

// Create one boid somewhere inside the margins with a random velocity
pub fn spawn_boid<S, R>(screen: &S, rng: &mut R) -> Boid
where
    S: Screen + ?Sized,
    R: Rng + ?Sized,
{
    let margin = SCREEN_MARGIN.ceil() as i32;
    let x = spawn_coordinate(screen.width(), margin, rng);
    let y = spawn_coordinate(screen.height(), margin, rng);

    let xvel = rng.gen_range(-MAX_VELOCITY..=MAX_VELOCITY);
    let yvel = rng.gen_range(-MAX_VELOCITY..=MAX_VELOCITY);

    Boid::new(x, y, xvel, yvel)
}

fn spawn_coordinate<R: Rng + ?Sized>(extent: i32, margin: i32, rng: &mut R) -> i32 {
    if extent > 2 * margin {
        rng.gen_range(margin..extent - margin)
    } else if extent > 0 {
        // Screen too small to leave the margins clear
        rng.gen_range(0..extent)
    } else {
        0
    }
}

// Replace the flock with `count` fresh boids
pub fn reset_boids<S, R>(boids: &mut Vec<Boid>, count: usize, screen: &S, rng: &mut R)
where
    S: Screen + ?Sized,
    R: Rng + ?Sized,
{
    boids.clear();
    resize_boids(boids, count, screen, rng);
    debug!(count, "flock reset");
}

// Grow or shrink the flock, keeping the boids that are already there
pub fn resize_boids<S, R>(boids: &mut Vec<Boid>, count: usize, screen: &S, rng: &mut R)
where
    S: Screen + ?Sized,
    R: Rng + ?Sized,
{
    let before = boids.len();
    boids.truncate(count);
    while boids.len() < count {
        boids.push(spawn_boid(screen, rng));
    }
    if before != count {
        debug!(from = before, to = count, "flock resized");
    }
}

/// Summary of the flock, used by the debug overlay and the headless runner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlockStats {
    pub count: usize,
    pub mean_speed: f32,
    pub max_component: f32,
    pub off_screen: usize,
}

impl FlockStats {
    pub fn from_boids<S: Screen + ?Sized>(boids: &[Boid], screen: &S) -> Self {
        if boids.is_empty() {
            return Self::default();
        }

        let mut speed_sum = 0.0;
        let mut max_component: f32 = 0.0;
        let mut off_screen = 0;

        for boid in boids {
            speed_sum += boid.xvel().hypot(boid.yvel());
            max_component = max_component.max(boid.xvel().abs()).max(boid.yvel().abs());

            let inside = (0..screen.width()).contains(&boid.xpos())
                && (0..screen.height()).contains(&boid.ypos());
            if !inside {
                off_screen += 1;
            }
        }

        Self {
            count: boids.len(),
            mean_speed: speed_sum / boids.len() as f32,
            max_component,
            off_screen,
        }
    }
}
