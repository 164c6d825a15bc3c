//! Ratio-scaled proximity tests
//!
//! Hit detection works on nominal sprite geometry shrunk by a fixed ratio,
//! so near-misses at the sprite corners stay misses. Two shapes cover every
//! pairing: centered squares for the ship against rocks, bounding circles
//! for everything a missile can hit.

use glam::Vec2;

/// Overlap test between two axis-aligned squares centered on `a` and `b`,
/// each side scaled by `ratio` before the test.
pub fn rect_hit(a: Vec2, a_side: f32, b: Vec2, b_side: f32, ratio: f32) -> bool {
    let reach = (a_side + b_side) * 0.5 * ratio;
    (a.x - b.x).abs() < reach && (a.y - b.y).abs() < reach
}

/// Proximity test between two circles with both radii scaled by `ratio`
pub fn circle_hit(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32, ratio: f32) -> bool {
    let reach = (a_radius + b_radius) * ratio;
    a.distance_squared(b) < reach * reach
}
