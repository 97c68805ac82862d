//! Runs the flock without opening a window.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::boid::Boid;
use crate::config::LaunchConfig;
use crate::physics::{self, FlockStats};
use crate::surface::{RngSource, ScreenSize};

const REPORT_EVERY: u64 = 60;

pub fn run_headless(launch: &LaunchConfig, frames: u64) -> FlockStats {
    let screen = ScreenSize::new(launch.width as i32, launch.height as i32);
    let mut rng = match launch.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut boids: Vec<Boid> = Vec::with_capacity(launch.params.num_boids);
    physics::reset_boids(&mut boids, launch.params.num_boids, &screen, &mut rng);

    let mut source = RngSource::new(rng);
    for frame in 1..=frames {
        physics::update_boids(&mut boids, &launch.params, &screen, &mut source);

        if frame % REPORT_EVERY == 0 {
            let stats = FlockStats::from_boids(&boids, &screen);
            info!(frame, mean_speed = stats.mean_speed, off_screen = stats.off_screen, "flock progress");
        }
    }

    let stats = FlockStats::from_boids(&boids, &screen);
    info!(
        frames,
        count = stats.count,
        mean_speed = stats.mean_speed,
        max_component = stats.max_component,
        off_screen = stats.off_screen,
        "headless run finished"
    );
    stats
}
