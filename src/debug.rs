/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and flock statistics to be displayed in the UI.
 */

use std::time::Duration;

use crate::physics::FlockStats;

// Debug information to display
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub frames_simulated: u64,
    pub stats: FlockStats,
}

impl DebugInfo {
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Frames: {}", self.frames_simulated),
            format!("Boids: {}", self.stats.count),
            format!("Mean speed: {:.2}", self.stats.mean_speed),
            format!("Off screen: {}", self.stats.off_screen),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_format_metrics() {
        let info = DebugInfo {
            fps: 59.94,
            frame_time: Duration::from_micros(16_700),
            frames_simulated: 12,
            stats: FlockStats { count: 3, mean_speed: 2.5, max_component: 4.0, off_screen: 1 },
        };
        let lines = info.lines();
        assert_eq!(lines[0], "FPS: 59.9");
        assert_eq!(lines[1], "Frame time: 16.70 ms");
        assert_eq!(lines[3], "Boids: 3");
        assert_eq!(lines[5], "Off screen: 1");
    }
}
