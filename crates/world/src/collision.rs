//! Circle-circle overlap test between entities.

use glam::Vec2;

use crate::types::{Agent, Landmark};

/// Anything with a position and a radius.
pub trait Body {
    fn position(&self) -> Vec2;
    fn radius(&self) -> f32;
}

impl Body for Agent {
    fn position(&self) -> Vec2 {
        self.state.pos
    }

    fn radius(&self) -> f32 {
        self.size
    }
}

impl Body for Landmark {
    fn position(&self) -> Vec2 {
        self.state.pos
    }

    fn radius(&self) -> f32 {
        self.size
    }
}

/// Returns `true` when the centre distance is strictly less than the sum of radii.
///
/// Uses the true Euclidean distance rather than its square so the threshold
/// compares exactly against `a.radius() + b.radius()`. Touching circles do not
/// collide.
#[must_use]
pub fn is_collision<A: Body + ?Sized, B: Body + ?Sized>(a: &A, b: &B) -> bool {
    let distance = (a.position() - b.position()).length();
    distance < a.radius() + b.radius()
}
