use std::collections::BTreeSet;

use pitchboard_engine::coords::{Rect, Vec2};

use super::formation;
use super::marker::{EntityId, Marker, MarkerId};
use super::stroke::Stroke;

/// Default marker radii in world units.
pub const DEFAULT_PLAYER_RADIUS: f32 = 16.0;
pub const DEFAULT_BALL_RADIUS: f32 = 12.0;

/// Default ball position: the kick-off spot.
const DEFAULT_BALL_POS: Vec2 = Vec2::new(600.0, 350.0);

/// The tactics-board scene: both teams, the ball, annotation strokes, and
/// the current selection.
///
/// Team vectors double as Z-order: the last marker paints on top and wins
/// ties in hit testing. The selection stores stable [`EntityId`]s, so
/// removing or resetting markers can never leave a dangling entry — stale
/// ids simply stop resolving.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    players: Vec<Marker>,
    opponents: Vec<Marker>,
    ball: Vec2,
    strokes: Vec<Stroke>,
    selection: BTreeSet<EntityId>,

    player_radius: f32,
    ball_radius: f32,

    next_id: u32,
}

impl Default for Board {
    fn default() -> Self {
        let mut board = Self {
            players: Vec::new(),
            opponents: Vec::new(),
            ball: DEFAULT_BALL_POS,
            strokes: Vec::new(),
            selection: BTreeSet::new(),
            player_radius: DEFAULT_PLAYER_RADIUS,
            ball_radius: DEFAULT_BALL_RADIUS,
            next_id: 0,
        };
        board.reset_formation();
        board
    }
}

impl Board {
    /// A board with both teams in the default formation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a board from loaded state. Markers get fresh ids and the
    /// selection starts empty.
    pub(crate) fn from_parts(
        players: Vec<Vec2>,
        opponents: Vec<Vec2>,
        ball: Vec2,
        strokes: Vec<Stroke>,
        player_radius: f32,
        ball_radius: f32,
    ) -> Self {
        let mut next_id = 0;
        let players = players
            .into_iter()
            .map(|pos| board_marker(&mut next_id, pos))
            .collect();
        let opponents = opponents
            .into_iter()
            .map(|pos| board_marker(&mut next_id, pos))
            .collect();

        Self {
            players,
            opponents,
            ball,
            strokes,
            selection: BTreeSet::new(),
            player_radius,
            ball_radius,
            next_id,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn players(&self) -> &[Marker] {
        &self.players
    }

    #[inline]
    pub fn opponents(&self) -> &[Marker] {
        &self.opponents
    }

    #[inline]
    pub fn ball(&self) -> Vec2 {
        self.ball
    }

    #[inline]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    #[inline]
    pub fn selection(&self) -> &BTreeSet<EntityId> {
        &self.selection
    }

    #[inline]
    pub fn player_radius(&self) -> f32 {
        self.player_radius
    }

    #[inline]
    pub fn ball_radius(&self) -> f32 {
        self.ball_radius
    }

    /// Current position of an entity, if it still exists.
    pub fn entity_pos(&self, id: EntityId) -> Option<Vec2> {
        match id {
            EntityId::Ball => Some(self.ball),
            EntityId::Player(mid) => find(&self.players, mid).map(|m| m.pos),
            EntityId::Opponent(mid) => find(&self.opponents, mid).map(|m| m.pos),
        }
    }

    pub fn entity_exists(&self, id: EntityId) -> bool {
        self.entity_pos(id).is_some()
    }

    // ── strokes ───────────────────────────────────────────────────────────

    /// Starts a new stroke; it becomes the active one for appends.
    pub fn begin_stroke(&mut self, start: Vec2) {
        self.strokes.push(Stroke::new(start));
    }

    /// Appends to the most recently started stroke. Silent no-op when no
    /// stroke exists.
    pub fn append_active_stroke(&mut self, p: Vec2) {
        match self.strokes.last_mut() {
            Some(stroke) => stroke.push(p),
            None => log::trace!("append without an active stroke ignored"),
        }
    }

    /// Removes every stroke with at least one vertex strictly within
    /// `radius` of `p`. Returns how many were removed; erasing over empty
    /// space is a no-op, so repeating an erase is idempotent.
    pub fn erase_strokes_near(&mut self, p: Vec2, radius: f32) -> usize {
        let before = self.strokes.len();
        self.strokes.retain(|s| !s.has_vertex_near(p, radius));
        let removed = before - self.strokes.len();
        if removed > 0 {
            log::debug!("erased {removed} stroke(s)");
        }
        removed
    }

    // ── selection ─────────────────────────────────────────────────────────

    /// Replaces the selection. Ids that no longer resolve are dropped, so
    /// the selection invariant (subset of live entities) holds by
    /// construction.
    pub fn replace_selection<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = EntityId>,
    {
        self.selection = ids
            .into_iter()
            .filter(|&id| self.entity_exists(id))
            .collect();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Rebuilds the selection from scratch: every entity whose center lies
    /// strictly inside `rect` (markers exactly on the edge stay out).
    pub fn select_in_rect(&mut self, rect: Rect) {
        self.selection.clear();
        for m in &self.players {
            if rect.contains_interior(m.pos) {
                self.selection.insert(EntityId::Player(m.id));
            }
        }
        for m in &self.opponents {
            if rect.contains_interior(m.pos) {
                self.selection.insert(EntityId::Opponent(m.id));
            }
        }
        if rect.contains_interior(self.ball) {
            self.selection.insert(EntityId::Ball);
        }
    }

    /// Translates every selected entity by `delta`.
    pub fn move_selected(&mut self, delta: Vec2) {
        let selection = &self.selection;
        for m in &mut self.players {
            if selection.contains(&EntityId::Player(m.id)) {
                m.pos += delta;
            }
        }
        for m in &mut self.opponents {
            if selection.contains(&EntityId::Opponent(m.id)) {
                m.pos += delta;
            }
        }
        if selection.contains(&EntityId::Ball) {
            self.ball += delta;
        }
    }

    // ── z-order ───────────────────────────────────────────────────────────

    /// Moves a marker to the top of its own team's Z-order. The ball and
    /// unknown ids are left alone; teams never mix.
    pub fn bring_to_front(&mut self, id: EntityId) {
        match id {
            EntityId::Ball => {}
            EntityId::Player(mid) => raise(&mut self.players, mid),
            EntityId::Opponent(mid) => raise(&mut self.opponents, mid),
        }
    }

    // ── formation / sizes ─────────────────────────────────────────────────

    /// Clears strokes and selection and lays both teams out in the built-in
    /// formation. The ball keeps its position. Markers get fresh ids.
    pub fn reset_formation(&mut self) {
        self.strokes.clear();
        self.selection.clear();

        self.players = formation::player_slots()
            .map(|pos| board_marker(&mut self.next_id, pos))
            .collect();
        self.opponents = formation::opponent_slots()
            .map(|pos| board_marker(&mut self.next_id, pos))
            .collect();
    }

    /// Sets the player marker radius. Rejects non-finite or non-positive
    /// values and reports whether the value was applied.
    pub fn set_player_radius(&mut self, r: f32) -> bool {
        if !valid_radius(r) {
            log::warn!("rejected player radius {r}");
            return false;
        }
        self.player_radius = r;
        true
    }

    /// Sets the ball radius, with the same validation as the player radius.
    pub fn set_ball_radius(&mut self, r: f32) -> bool {
        if !valid_radius(r) {
            log::warn!("rejected ball radius {r}");
            return false;
        }
        self.ball_radius = r;
        true
    }
}

fn valid_radius(r: f32) -> bool {
    r.is_finite() && r > 0.0
}

fn find(markers: &[Marker], id: MarkerId) -> Option<&Marker> {
    markers.iter().find(|m| m.id == id)
}

fn raise(markers: &mut Vec<Marker>, id: MarkerId) {
    if let Some(i) = markers.iter().position(|m| m.id == id) {
        let m = markers.remove(i);
        markers.push(m);
    }
}

fn board_marker(next_id: &mut u32, pos: Vec2) -> Marker {
    let id = MarkerId(*next_id);
    *next_id += 1;
    Marker { id, pos }
}
