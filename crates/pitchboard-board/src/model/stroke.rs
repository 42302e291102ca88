use pitchboard_engine::coords::Vec2;

/// A freehand annotation stroke.
///
/// Vertices are appended in drawing order by one pen gesture; after the
/// gesture ends the stroke only ever gets deleted, never edited.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Vec2>,
}

impl Stroke {
    #[inline]
    pub fn new(start: Vec2) -> Self {
        Self {
            points: vec![start],
        }
    }

    /// Rebuilds a stroke from loaded vertices; may be empty.
    #[inline]
    pub(crate) fn from_points(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub(crate) fn push(&mut self, p: Vec2) {
        self.points.push(p);
    }

    /// True when any vertex lies strictly within `radius` of `p`.
    pub fn has_vertex_near(&self, p: Vec2, radius: f32) -> bool {
        self.points.iter().any(|&v| v.distance(p) < radius)
    }
}
