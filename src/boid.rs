/*
 * Boid Module
 *
 * This module defines the Boid struct and its behavior.
 * Each boid receives three influences from its neighbors, computed by the driver:
 * 1. Separation: Move away from boids that are too close
 * 2. Alignment: Match the average velocity of visible boids
 * 3. Cohesion: Steer towards the average position of visible boids
 *
 * On top of that the boid turns back from the screen margins, wanders randomly
 * when it is clear of them, and keeps its speed per axis under MAX_VELOCITY.
 * Positions are whole pixels; each update moves by the velocity truncated toward zero.
 */

use crate::steering::{BoundaryContact, SteeringPolicy, BOUNDARY_TURN_FACTOR};
use crate::surface::{Canvas, RandomSource, Screen};
use crate::{BOID_COLOR, BOID_SIZE, MAX_VELOCITY, SCREEN_MARGIN};

/// Plain copy of a boid's position and velocity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoidState {
    pub xpos: i32,
    pub ypos: i32,
    pub xvel: f32,
    pub yvel: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Boid {
    xpos: i32,
    ypos: i32,
    xvel: f32,
    yvel: f32,
}

impl Boid {
    // No validation: off-screen positions and oversized velocities are
    // reconciled by the next update
    pub fn new(x: i32, y: i32, xvel: f32, yvel: f32) -> Self {
        Self {
            xpos: x,
            ypos: y,
            xvel,
            yvel,
        }
    }

    pub fn from_state(state: BoidState) -> Self {
        Self::new(state.xpos, state.ypos, state.xvel, state.yvel)
    }

    pub fn state(&self) -> BoidState {
        BoidState {
            xpos: self.xpos,
            ypos: self.ypos,
            xvel: self.xvel,
            yvel: self.yvel,
        }
    }

    pub fn xpos(&self) -> i32 {
        self.xpos
    }

    pub fn ypos(&self) -> i32 {
        self.ypos
    }

    pub fn xvel(&self) -> f32 {
        self.xvel
    }

    pub fn yvel(&self) -> f32 {
        self.yvel
    }

    pub fn set_xpos(&mut self, x: i32) {
        self.xpos = x;
    }

    pub fn set_ypos(&mut self, y: i32) {
        self.ypos = y;
    }

    pub fn set_xvel(&mut self, xvel: f32) {
        self.xvel = xvel;
    }

    pub fn set_yvel(&mut self, yvel: f32) {
        self.yvel = yvel;
    }

    /// Push away from crowding neighbors. `move_x`/`move_y` are the summed
    /// offsets from each too-close neighbor to this boid.
    pub fn apply_separation(&mut self, avoid_factor: f32, move_x: i32, move_y: i32) {
        self.xvel += move_x as f32 * avoid_factor;
        self.yvel += move_y as f32 * avoid_factor;
    }

    /// Interpolate velocity toward the neighborhood average. A factor outside
    /// [0, 1] overshoots; that is left to the caller.
    pub fn apply_alignment(&mut self, align_factor: f32, avg_xvel: f32, avg_yvel: f32) {
        self.xvel += (avg_xvel - self.xvel) * align_factor;
        self.yvel += (avg_yvel - self.yvel) * align_factor;
    }

    /// Pull toward the neighborhood center. The positional offset feeds
    /// velocity directly.
    pub fn apply_cohesion(&mut self, cohesion_factor: f32, avg_xpos: f32, avg_ypos: f32) {
        self.xvel += (avg_xpos - self.xpos as f32) * cohesion_factor;
        self.yvel += (avg_ypos - self.ypos as f32) * cohesion_factor;
    }

    // Update with the classic steering policy
    pub fn update<S, R>(&mut self, screen: &S, rng: &mut R)
    where
        S: Screen + ?Sized,
        R: RandomSource + ?Sized,
    {
        self.update_with(screen, rng, &SteeringPolicy::default());
    }

    // Boundary steering, random steering, clamp, integrate
    pub fn update_with<S, R>(&mut self, screen: &S, rng: &mut R, policy: &SteeringPolicy)
    where
        S: Screen + ?Sized,
        R: RandomSource + ?Sized,
    {
        let contact = self.steer_from_boundaries(screen);

        let (dx, dy) = policy.wander(rng, contact);
        self.xvel += dx;
        self.yvel += dy;

        self.integrate();
    }

    fn steer_from_boundaries<S: Screen + ?Sized>(&mut self, screen: &S) -> BoundaryContact {
        let mut contact = BoundaryContact::default();

        let x = self.xpos as f32;
        if x < SCREEN_MARGIN {
            self.xvel += BOUNDARY_TURN_FACTOR;
            contact.x = true;
        } else if x > screen.width() as f32 - SCREEN_MARGIN {
            self.xvel -= BOUNDARY_TURN_FACTOR;
            contact.x = true;
        }

        let y = self.ypos as f32;
        if y < SCREEN_MARGIN {
            self.yvel += BOUNDARY_TURN_FACTOR;
            contact.y = true;
        } else if y > screen.height() as f32 - SCREEN_MARGIN {
            self.yvel -= BOUNDARY_TURN_FACTOR;
            contact.y = true;
        }

        contact
    }

    /// Clamp each velocity component to MAX_VELOCITY, then move by the
    /// truncated velocity.
    pub fn integrate(&mut self) {
        self.xvel = self.xvel.clamp(-MAX_VELOCITY, MAX_VELOCITY);
        self.yvel = self.yvel.clamp(-MAX_VELOCITY, MAX_VELOCITY);

        // `as` truncates toward zero
        self.xpos = self.xpos.saturating_add(self.xvel as i32);
        self.ypos = self.ypos.saturating_add(self.yvel as i32);
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.draw_circle(self.xpos, self.ypos, BOID_SIZE, BOID_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steering::tests::ScriptedRandom;
    use crate::steering::{BoundarySuppression, RandomDraw, RANDOM_TURN_FACTOR};
    use crate::surface::{Color, ScreenSize};

    const EPS: f32 = 1e-5;

    fn screen() -> ScreenSize {
        ScreenSize::new(800, 600)
    }

    // Middle-of-range rolls never turn
    fn quiet() -> ScriptedRandom {
        ScriptedRandom::constant(50)
    }

    #[derive(Default)]
    struct RecordingCanvas {
        circles: Vec<(i32, i32, f32, Color)>,
    }

    impl Canvas for RecordingCanvas {
        fn draw_circle(&mut self, x: i32, y: i32, radius: f32, color: Color) {
            self.circles.push((x, y, radius, color));
        }
    }

    #[test]
    fn new_stores_values_verbatim() {
        let boid = Boid::new(-40, 9000, 12.5, -7.0);
        assert_eq!(
            boid.state(),
            BoidState { xpos: -40, ypos: 9000, xvel: 12.5, yvel: -7.0 }
        );
    }

    #[test]
    fn setters_do_not_validate() {
        let mut boid = Boid::default();
        boid.set_xpos(-1000);
        boid.set_ypos(5000);
        boid.set_xvel(42.0);
        boid.set_yvel(-42.0);
        assert_eq!(boid.xpos(), -1000);
        assert_eq!(boid.ypos(), 5000);
        assert_eq!(boid.xvel(), 42.0);
        assert_eq!(boid.yvel(), -42.0);
    }

    #[test]
    fn separation_scales_move_vector() {
        let mut boid = Boid::new(400, 300, 1.0, -1.0);
        boid.apply_separation(0.05, 10, -20);
        assert!((boid.xvel() - 1.5).abs() < EPS);
        assert!((boid.yvel() - -2.0).abs() < EPS);
    }

    #[test]
    fn alignment_halves_error_each_call() {
        let mut boid = Boid::new(400, 300, 0.0, 4.0);
        let mut prev_err = (2.0f32 - boid.xvel()).abs();
        for _ in 0..10 {
            boid.apply_alignment(0.5, 2.0, -2.0);
            let err = (2.0 - boid.xvel()).abs();
            assert!(err < prev_err);
            assert!((err - prev_err / 2.0).abs() < EPS);
            prev_err = err;
        }
        assert!((boid.yvel() - -2.0).abs() < 0.01);
    }

    #[test]
    fn cohesion_pulls_toward_center() {
        let mut boid = Boid::new(100, 100, 0.0, 0.0);
        boid.apply_cohesion(0.01, 200.0, 50.0);
        assert!(boid.xvel() > 0.0);
        assert!(boid.yvel() < 0.0);
        assert!((boid.xvel() - 1.0).abs() < EPS);
        assert!((boid.yvel() - -0.5).abs() < EPS);
    }

    #[test]
    fn update_truncates_positive_and_negative_velocity() {
        let mut boid = Boid::new(100, 300, 3.7, 0.0);
        boid.update(&screen(), &mut quiet());
        assert_eq!(boid.xpos(), 103);

        let mut boid = Boid::new(400, 300, -3.7, 0.0);
        boid.update(&screen(), &mut quiet());
        assert_eq!(boid.xpos(), 397);
    }

    #[test]
    fn left_margin_adds_turn_factor_regardless_of_sign() {
        let x = SCREEN_MARGIN as i32 - 1;
        for start in [-2.0f32, 0.0, 2.0] {
            let mut boid = Boid::new(x, 300, start, 0.0);
            boid.update(&screen(), &mut quiet());
            assert!((boid.xvel() - (start + BOUNDARY_TURN_FACTOR)).abs() < EPS);
        }
    }

    #[test]
    fn right_and_bottom_margins_subtract_turn_factor() {
        let mut boid = Boid::new(790, 590, 0.0, 0.0);
        boid.update(&screen(), &mut quiet());
        assert!((boid.xvel() + BOUNDARY_TURN_FACTOR).abs() < EPS);
        assert!((boid.yvel() + BOUNDARY_TURN_FACTOR).abs() < EPS);
        assert_eq!(boid.xpos(), 789);
        assert_eq!(boid.ypos(), 589);
    }

    #[test]
    fn margin_edge_is_exclusive() {
        // 52 < 52.5 is inside the margin, 53 is not
        let mut inside = Boid::new(52, 300, 0.0, 0.0);
        inside.update(&screen(), &mut quiet());
        assert!(inside.xvel() > 0.0);

        let mut outside = Boid::new(53, 300, 0.0, 0.0);
        outside.update(&screen(), &mut quiet());
        assert_eq!(outside.xvel(), 0.0);
    }

    #[test]
    fn update_clamps_after_steering() {
        let mut boid = Boid::new(400, 300, 4.9, -4.9);
        boid.apply_separation(1.0, 100, -100);
        boid.update(&screen(), &mut quiet());
        assert_eq!(boid.xvel(), MAX_VELOCITY);
        assert_eq!(boid.yvel(), -MAX_VELOCITY);
        assert_eq!(boid.xpos(), 405);
        assert_eq!(boid.ypos(), 295);
    }

    #[test]
    fn random_steering_applies_when_clear_of_margins() {
        // x: low roll turns negative; y: miss then high roll turns positive
        let mut rng = ScriptedRandom::new(&[0, 50, 100]);
        let mut boid = Boid::new(400, 300, 0.0, 0.0);
        boid.update(&screen(), &mut rng);
        assert!((boid.xvel() + RANDOM_TURN_FACTOR).abs() < EPS);
        assert!((boid.yvel() - RANDOM_TURN_FACTOR).abs() < EPS);
        assert_eq!(rng.draws, 3);
    }

    #[test]
    fn one_boundary_contact_suppresses_both_axes() {
        let mut rng = ScriptedRandom::constant(0);
        let mut boid = Boid::new(10, 300, 0.0, 0.0);
        boid.update(&screen(), &mut rng);
        assert!((boid.xvel() - BOUNDARY_TURN_FACTOR).abs() < EPS);
        assert_eq!(boid.yvel(), 0.0);
        assert_eq!(rng.draws, 4);
    }

    #[test]
    fn per_axis_suppression_keeps_free_axis_wandering() {
        let policy = SteeringPolicy {
            random_draw: RandomDraw::SingleDraw,
            suppression: BoundarySuppression::PerAxis,
        };
        let mut rng = ScriptedRandom::constant(0);
        let mut boid = Boid::new(10, 300, 0.0, 0.0);
        boid.update_with(&screen(), &mut rng, &policy);
        assert!((boid.xvel() - BOUNDARY_TURN_FACTOR).abs() < EPS);
        assert!((boid.yvel() + RANDOM_TURN_FACTOR).abs() < EPS);
        assert_eq!(rng.draws, 1);
    }

    #[test]
    fn margins_follow_live_screen_size() {
        let mut boid = Boid::new(700, 300, 0.0, 0.0);
        boid.update(&ScreenSize::new(1024, 768), &mut quiet());
        assert_eq!(boid.xvel(), 0.0);

        let mut boid = Boid::new(700, 300, 0.0, 0.0);
        boid.update(&ScreenSize::new(720, 768), &mut quiet());
        assert!((boid.xvel() + BOUNDARY_TURN_FACTOR).abs() < EPS);
    }

    #[test]
    fn extreme_inputs_stay_finite_and_bounded() {
        let mut boid = Boid::new(i32::MAX, i32::MIN, 1.0e30, -1.0e30);
        boid.apply_separation(1.0e6, i32::MAX, i32::MIN);
        boid.apply_alignment(-3.0, 1.0e20, -1.0e20);
        boid.apply_cohesion(2.0, 0.0, 0.0);
        boid.update(&screen(), &mut quiet());
        assert!(boid.xvel().is_finite() && boid.yvel().is_finite());
        assert!(boid.xvel().abs() <= MAX_VELOCITY);
        assert!(boid.yvel().abs() <= MAX_VELOCITY);
    }

    #[test]
    fn draw_paints_one_circle_at_position() {
        let boid = Boid::new(12, 34, 1.0, 1.0);
        let mut canvas = RecordingCanvas::default();
        boid.draw(&mut canvas);
        assert_eq!(canvas.circles, vec![(12, 34, BOID_SIZE, BOID_COLOR)]);
        assert_eq!(boid, Boid::new(12, 34, 1.0, 1.0));
    }
}
