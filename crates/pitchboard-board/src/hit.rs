//! Hit testing with Z-order priority.

use pitchboard_engine::coords::Vec2;

use crate::model::{Board, EntityId, Marker};

/// Pick radius for markers and the ball, in world units. Deliberately a bit
/// larger than the default marker radius so small markers stay grabbable.
pub const HIT_RADIUS: f32 = 20.0;

/// Pick radius for stroke vertices; the eraser uses the same value.
pub const STROKE_HIT_RADIUS: f32 = 10.0;

/// Returns the topmost entity under `world`, or `None`.
///
/// Priority order: ball first, then opponents top-down, then players
/// top-down — the reverse of paint order, so whatever the user sees on top
/// is what a click grabs. Distance is strictly less than [`HIT_RADIUS`].
pub fn pick_entity(board: &Board, world: Vec2) -> Option<EntityId> {
    if world.distance(board.ball()) < HIT_RADIUS {
        return Some(EntityId::Ball);
    }

    if let Some(m) = pick_marker(board.opponents(), world) {
        return Some(EntityId::Opponent(m.id));
    }

    pick_marker(board.players(), world).map(|m| EntityId::Player(m.id))
}

fn pick_marker(markers: &[Marker], world: Vec2) -> Option<&Marker> {
    // Last marker paints on top, so scan back-to-front.
    markers
        .iter()
        .rev()
        .find(|m| m.pos.distance(world) < HIT_RADIUS)
}

/// Indices of strokes with at least one vertex strictly within `radius` of
/// `world`. The eraser removes exactly this set.
pub fn pick_strokes_near(board: &Board, world: Vec2, radius: f32) -> Vec<usize> {
    board
        .strokes()
        .iter()
        .enumerate()
        .filter(|(_, s)| s.has_vertex_near(world, radius))
        .map(|(i, _)| i)
        .collect()
}
