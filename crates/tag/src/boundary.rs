//! Fixed arena edge.
//!
//! Four large discs sit just outside each side of the arena and four smaller
//! discs plug the corners. Rendering and collision code outside this crate
//! assume exactly this layout, so the coordinates and radii are literal.

use glam::Vec2;
use world::{Color, Landmark};

/// Number of boundary markers appended to every world.
pub const NUM_BOUNDARIES: usize = 8;

const SIDE_OFFSET: f32 = 3.5;
const SIDE_SIZE: f32 = 2.0;
const CORNER_OFFSET: f32 = 1.75;
const CORNER_SIZE: f32 = 0.474_875;

pub const BOUNDARY_COLOR: Color = [0.75, 0.75, 0.75];

/// Centre and radius of each marker, in roster order.
pub const BOUNDARY_LAYOUT: [(Vec2, f32); NUM_BOUNDARIES] = [
    (Vec2::new(0.0, -SIDE_OFFSET), SIDE_SIZE),
    (Vec2::new(0.0, SIDE_OFFSET), SIDE_SIZE),
    (Vec2::new(SIDE_OFFSET, 0.0), SIDE_SIZE),
    (Vec2::new(-SIDE_OFFSET, 0.0), SIDE_SIZE),
    (Vec2::new(CORNER_OFFSET, -CORNER_OFFSET), CORNER_SIZE),
    (Vec2::new(-CORNER_OFFSET, -CORNER_OFFSET), CORNER_SIZE),
    (Vec2::new(-CORNER_OFFSET, CORNER_OFFSET), CORNER_SIZE),
    (Vec2::new(CORNER_OFFSET, CORNER_OFFSET), CORNER_SIZE),
];

/// Creates the eight immovable boundary markers.
#[must_use]
pub fn boundary_markers() -> Vec<Landmark> {
    BOUNDARY_LAYOUT
        .iter()
        .enumerate()
        .map(|(i, &(pos, size))| {
            let mut marker = Landmark::new(format!("boundary {i}"), size);
            marker.boundary = true;
            marker.color = BOUNDARY_COLOR;
            marker.state.pos = pos;
            marker.state.vel = Vec2::ZERO;
            marker
        })
        .collect()
}
