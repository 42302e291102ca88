use pitchboard_engine::coords::Vec2;

/// Stable marker identifier, unique across both teams for the lifetime of
/// a board. Ids survive Z-order shuffles, so the selection can reference
/// markers without holding positions into the team vectors.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct MarkerId(pub(crate) u32);

/// A positioned team marker.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Marker {
    pub id: MarkerId,
    pub pos: Vec2,
}

/// Reference to a selectable entity on the board.
///
/// Strokes are never selectable and have no id here. The ball is a
/// singleton, so it needs no marker id.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum EntityId {
    Ball,
    Player(MarkerId),
    Opponent(MarkerId),
}
