use super::{Bounds, Point};

/// Minimum number of vertices a polygon may have
pub const MIN_VERTICES: usize = 3;

/// Ordered collection of polygons the queries run against
pub type PolygonSet = Vec<Polygon>;

/// Simple polygon given by its boundary walk
///
/// Vertex order is significant: two polygons are equal only when they list
/// the same points in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Returns `None` when fewer than [`MIN_VERTICES`] points are given
    pub fn new(points: Vec<Point>) -> Option<Self> {
        if points.len() < MIN_VERTICES {
            return None;
        }
        Some(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Area by the shoelace formula
    ///
    /// The signed sum is normalised, so clockwise and counter-clockwise
    /// walks give the same result. Each cross product fits in i64 but their
    /// sum may not, so it is accumulated in i128.
    pub fn area(&self) -> f64 {
        let doubled: i128 = self
            .points
            .iter()
            .zip(self.points.iter().cycle().skip(1))
            .map(|(a, b)| i128::from(a.cross(b)))
            .sum();

        doubled.unsigned_abs() as f64 / 2.0
    }

    pub fn bounds(&self) -> Bounds {
        // at least MIN_VERTICES points by construction
        Bounds::around(self.points[0], &self.points[1..])
    }

    /// Componentwise minimum over all vertices
    pub fn bounding_min(&self) -> Point {
        self.bounds().min_corner()
    }

    /// Componentwise maximum over all vertices
    pub fn bounding_max(&self) -> Point {
        self.bounds().max_corner()
    }

    /// Bounding-box overlap test
    ///
    /// This is only an approximation of real polygon intersection: two
    /// shapes whose boxes overlap may still be disjoint. Nothing finer is
    /// computed here.
    pub fn intersects(&self, other: &Polygon) -> bool {
        self.bounds().overlaps(&other.bounds())
    }
}
