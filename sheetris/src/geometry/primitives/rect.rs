use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Point;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    /// Rectangle with its bottom-left corner at `(x, y)`.
    /// Callers guarantee `width` and `height` are non-negative.
    pub fn from_origin(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + width,
            y_max: y + height,
        }
    }

    /// Returns the geometric relation between `self` and another [`Rect`].
    /// Rectangles that only share an edge are [`GeoRelation::Disjoint`], identical rectangles are [`GeoRelation::Enclosed`].
    #[inline(always)]
    pub fn relation_to(&self, other: Rect) -> GeoRelation {
        if self.x_min >= other.x_min
            && self.y_min >= other.y_min
            && self.x_max <= other.x_max
            && self.y_max <= other.y_max
        {
            return GeoRelation::Enclosed;
        }
        if self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && self.x_max >= other.x_max
            && self.y_max >= other.y_max
        {
            return GeoRelation::Surrounding;
        }
        if !self.collides_with(&other) {
            return GeoRelation::Disjoint;
        }
        GeoRelation::Intersecting
    }

    /// True if a `width` x `height` rectangle anchored at the bottom-left corner of `self` stays inside `self`.
    /// Computed on the corner coordinates, so a successful fit never produces a rectangle that leaks out by rounding.
    #[inline(always)]
    pub fn fits_at_origin(&self, width: f64, height: f64) -> bool {
        self.x_min + width <= self.x_max && self.y_min + height <= self.y_max
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// A rectangle without interior, left behind when a split consumes a full side.
    pub fn is_degenerate(&self) -> bool {
        self.x_min >= self.x_max || self.y_min >= self.y_max
    }

    /// Returns the largest rectangle that is contained in both `a` and `b`.
    pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
        let x_min = f64::max(a.x_min, b.x_min);
        let y_min = f64::max(a.y_min, b.y_min);
        let x_max = f64::min(a.x_max, b.x_max);
        let y_max = f64::min(a.y_max, b.y_max);
        if x_min < x_max && y_min < y_max {
            Some(Rect {
                x_min,
                y_min,
                x_max,
                y_max,
            })
        } else {
            None
        }
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }
}

impl CollidesWith<Rect> for Rect {
    /// Interiors overlap. Touching edges do not count as a collision.
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        f64::max(self.x_min, other.x_min) < f64::min(self.x_max, other.x_max)
            && f64::max(self.y_min, other.y_min) < f64::min(self.y_max, other.y_max)
    }
}
