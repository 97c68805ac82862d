/*
 * Boid Flocking Simulation
 *
 * A small flock of boids steering by three rules:
 * 1. Separation: Move away from boids that are too close
 * 2. Alignment: Match the velocity of visible boids
 * 3. Cohesion: Steer towards the center of visible boids
 *
 * Boids also turn back from the screen margins and wander randomly when clear
 * of them. Run with --headless <FRAMES> to simulate without a window.
 */

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use boid_flock::{app, headless, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise --debug switches the crate to debug level
    let default_filter = if cli.debug { "boid_flock=debug" } else { "boid_flock=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let headless_frames = cli.headless;
    let launch = cli.into_launch().context("invalid launch configuration")?;

    match headless_frames {
        Some(frames) => {
            let stats = headless::run_headless(&launch, frames);
            println!(
                "boids: {}  mean speed: {:.2}  max component: {:.2}  off screen: {}",
                stats.count, stats.mean_speed, stats.max_component, stats.off_screen
            );
        }
        None => app::run(launch),
    }

    Ok(())
}
