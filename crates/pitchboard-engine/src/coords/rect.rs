use super::Vec2;

/// Axis-aligned rectangle (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Bounding box of two corner points, in any order.
    ///
    /// This is the rubber-band rectangle between a gesture's start point and
    /// the current pointer position; the result is always normalized.
    #[inline]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self {
            origin: min,
            size: max - min,
        }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        Self::from_corners(self.min(), self.max())
    }

    /// Strict interior containment: points on any edge are excluded.
    #[inline]
    pub fn contains_interior(self, p: Vec2) -> bool {
        let r = self.normalized();
        let min = r.min();
        let max = r.max();
        p.x > min.x && p.x < max.x && p.y > min.y && p.y < max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    // ── from_corners ──────────────────────────────────────────────────────

    #[test]
    fn from_corners_any_order() {
        let expected = r(1.0, 2.0, 4.0, 6.0);
        assert_eq!(Rect::from_corners(Vec2::new(1.0, 2.0), Vec2::new(5.0, 8.0)), expected);
        assert_eq!(Rect::from_corners(Vec2::new(5.0, 8.0), Vec2::new(1.0, 2.0)), expected);
        assert_eq!(Rect::from_corners(Vec2::new(1.0, 8.0), Vec2::new(5.0, 2.0)), expected);
    }

    #[test]
    fn from_corners_coincident_is_zero_size() {
        let p = Vec2::new(3.0, 3.0);
        let rect = Rect::from_corners(p, p);
        assert_eq!(rect.size, Vec2::zero());
        assert!(rect.is_empty());
    }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_flips_negative_extents() {
        let rect = r(10.0, 10.0, -4.0, -3.0);
        let n = rect.normalized();
        assert_eq!(n, r(6.0, 7.0, 4.0, 3.0));
    }

    // ── contains_interior ─────────────────────────────────────────────────

    #[test]
    fn interior_point_is_contained() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains_interior(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn edge_points_are_excluded() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(!rect.contains_interior(Vec2::new(0.0, 5.0)));
        assert!(!rect.contains_interior(Vec2::new(10.0, 5.0)));
        assert!(!rect.contains_interior(Vec2::new(5.0, 0.0)));
        assert!(!rect.contains_interior(Vec2::new(5.0, 10.0)));
        assert!(!rect.contains_interior(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn outside_point_is_excluded() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains_interior(Vec2::new(-1.0, 5.0)));
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains_interior(Vec2::new(5.0, 11.0)));
    }

    #[test]
    fn zero_size_contains_nothing() {
        let p = Vec2::new(2.0, 2.0);
        assert!(!Rect::from_corners(p, p).contains_interior(p));
    }
}
