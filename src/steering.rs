/*
 * Steering Module
 *
 * Constants and policy for the two steering effects a boid applies to itself
 * during update: turning back from the screen margins, and random wandering.
 *
 * The default policy reproduces the classic behavior exactly:
 * - a boundary contact on either axis switches random wandering off for both axes
 * - each axis rolls once for a negative turn and, failing that, rolls again
 *   for a positive turn
 * The alternative variants exist so both readings can be run and tested.
 */

use serde::{Deserialize, Serialize};

use crate::surface::RandomSource;

// Velocity change applied while inside a screen margin
pub const BOUNDARY_TURN_FACTOR: f32 = 1.9;

// Velocity change of a single random turn
pub const RANDOM_TURN_FACTOR: f32 = 0.5;

pub const RANDOM_MIN: i32 = 0;
pub const RANDOM_MAX: i32 = 100;

// A draw below this turns the axis negative
pub const TURN_NEGATIVE_BELOW: i32 = 20;

// A draw at or above this turns the axis positive
pub const TURN_POSITIVE_FROM: i32 = 80;

/// How random turns are rolled for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RandomDraw {
    /// Roll for a negative turn; if that misses, roll again for a positive
    /// turn. Rolls are taken even when wandering is suppressed, so an update
    /// always consumes between two and four values.
    #[default]
    Literal,
    /// One roll per axis checked against both thresholds. Nothing is rolled
    /// while the axis is suppressed.
    SingleDraw,
}

/// Which axes a boundary contact silences random wandering on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundarySuppression {
    /// Any contact silences both axes.
    #[default]
    Shared,
    /// A contact only silences its own axis.
    PerAxis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringPolicy {
    pub random_draw: RandomDraw,
    pub suppression: BoundarySuppression,
}

// Which boundaries were touched during the current update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundaryContact {
    pub x: bool,
    pub y: bool,
}

impl BoundaryContact {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

impl BoundarySuppression {
    // Returns whether random wandering is allowed on (x, y)
    pub fn wander_allowed(&self, contact: BoundaryContact) -> (bool, bool) {
        match self {
            BoundarySuppression::Shared => {
                let allowed = !contact.any();
                (allowed, allowed)
            }
            BoundarySuppression::PerAxis => (!contact.x, !contact.y),
        }
    }
}

impl RandomDraw {
    /// Velocity delta for one axis.
    pub fn turn<R: RandomSource + ?Sized>(&self, rng: &mut R, allowed: bool) -> f32 {
        match self {
            RandomDraw::Literal => {
                // The roll happens before the flag is consulted
                if rng.random_value(RANDOM_MIN, RANDOM_MAX) < TURN_NEGATIVE_BELOW && allowed {
                    -RANDOM_TURN_FACTOR
                } else if rng.random_value(RANDOM_MIN, RANDOM_MAX) >= TURN_POSITIVE_FROM && allowed {
                    RANDOM_TURN_FACTOR
                } else {
                    0.0
                }
            }
            RandomDraw::SingleDraw => {
                if !allowed {
                    return 0.0;
                }
                let roll = rng.random_value(RANDOM_MIN, RANDOM_MAX);
                if roll < TURN_NEGATIVE_BELOW {
                    -RANDOM_TURN_FACTOR
                } else if roll >= TURN_POSITIVE_FROM {
                    RANDOM_TURN_FACTOR
                } else {
                    0.0
                }
            }
        }
    }
}

impl SteeringPolicy {
    pub fn literal() -> Self {
        Self::default()
    }

    /// Turn deltas for (x, y) given this update's boundary contacts.
    pub fn wander<R: RandomSource + ?Sized>(&self, rng: &mut R, contact: BoundaryContact) -> (f32, f32) {
        let (allow_x, allow_y) = self.suppression.wander_allowed(contact);
        let dx = self.random_draw.turn(rng, allow_x);
        let dy = self.random_draw.turn(rng, allow_y);
        (dx, dy)
    }
}
