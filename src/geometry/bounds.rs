use super::Point;

/// Axis-aligned bounding box in integer coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    /// Smallest box holding `first` and every point of `rest`
    pub fn around(first: Point, rest: &[Point]) -> Self {
        let mut bounds = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        bounds.expand(rest);
        bounds
    }

    /// Expand bounds to include another set of points
    pub fn expand(&mut self, points: &[Point]) {
        for p in points {
            self.min_x = self.min_x.min(p.x);
            self.max_x = self.max_x.max(p.x);
            self.min_y = self.min_y.min(p.y);
            self.max_y = self.max_y.max(p.y);
        }
    }

    /// Lower-left corner. Not necessarily a vertex of the source shape.
    pub fn min_corner(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Upper-right corner. Not necessarily a vertex of the source shape.
    pub fn max_corner(&self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    /// Inclusive overlap test: boxes that only share an edge or a corner overlap
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.max_x >= other.min_x
            && self.max_y >= other.min_y
            && self.min_x <= other.max_x
            && self.min_y <= other.max_y
    }
}
