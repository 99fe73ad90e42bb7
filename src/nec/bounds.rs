use crate::nec::types::{Point2D, Segment};

/// Axis-aligned bounding box of a drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point2D,
    pub max: Point2D,
}

impl BoundingBox {
    /// An empty box: `min` at +inf, `max` at -inf, so the first included point
    /// sets both.
    pub fn new() -> Self {
        Self {
            min: Point2D::new(f64::INFINITY, f64::INFINITY),
            max: Point2D::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Widen the box to cover both endpoints of `segment`.
    ///
    /// `min` and `max` are tracked independently of each other.
    pub fn include_segment(&mut self, segment: &Segment) {
        self.max.x = self.max.x.max(segment.from.x.max(segment.to.x));
        self.max.y = self.max.y.max(segment.from.y.max(segment.to.y));
        self.min.x = self.min.x.min(segment.from.x.min(segment.to.x));
        self.min.y = self.min.y.min(segment.from.y.min(segment.to.y));
    }

    pub fn contains(&self, point: &Point2D) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}
