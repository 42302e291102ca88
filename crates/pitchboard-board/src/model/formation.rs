use pitchboard_engine::coords::Vec2;

/// Logical board width in world units; the home side mirrors across its
/// vertical midline.
pub const BOARD_WIDTH: f32 = 1200.0;

/// Horizontal shift applied to the away side.
const AWAY_SHIFT: f32 = 40.0;

/// 4-2-1-3 formation, one team's half, attacking to the right.
/// Keeper first, then defenders, midfield, and the front line.
const BASE_SLOTS: [Vec2; 11] = [
    Vec2::new(120.0, 350.0),
    Vec2::new(260.0, 150.0),
    Vec2::new(260.0, 280.0),
    Vec2::new(260.0, 420.0),
    Vec2::new(260.0, 550.0),
    Vec2::new(480.0, 280.0),
    Vec2::new(480.0, 420.0),
    Vec2::new(650.0, 300.0),
    Vec2::new(820.0, 200.0),
    Vec2::new(920.0, 350.0),
    Vec2::new(820.0, 500.0),
];

/// Home (player) slots: base slots mirrored across the vertical midline.
pub(crate) fn player_slots() -> impl Iterator<Item = Vec2> {
    BASE_SLOTS
        .iter()
        .map(|p| Vec2::new(BOARD_WIDTH - p.x, p.y))
}

/// Away (opponent) slots: base slots nudged toward their own goal.
pub(crate) fn opponent_slots() -> impl Iterator<Item = Vec2> {
    BASE_SLOTS.iter().map(|p| Vec2::new(p.x - AWAY_SHIFT, p.y))
}
