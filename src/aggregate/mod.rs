//! Scalar queries over a polygon set
//!
//! Everything here except [`remove_echoes`] is a pure function of its
//! inputs. Functions that have no meaningful answer for an empty set
//! return `None`; the command layer rejects empty sets before calling them.

use crate::geometry::Polygon;

fn is_even(polygon: &Polygon) -> bool {
    polygon.vertex_count() % 2 == 0
}

fn sum_area<F>(polygons: &[Polygon], mut keep: F) -> f64
where
    F: FnMut(&Polygon) -> bool,
{
    polygons
        .iter()
        .filter(|p| keep(*p))
        .map(Polygon::area)
        .sum()
}

/// Total area of polygons with an even number of vertices
pub fn area_even(polygons: &[Polygon]) -> f64 {
    sum_area(polygons, is_even)
}

/// Total area of polygons with an odd number of vertices
pub fn area_odd(polygons: &[Polygon]) -> f64 {
    sum_area(polygons, |p| !is_even(p))
}

/// Mean area over the whole set
pub fn area_mean(polygons: &[Polygon]) -> Option<f64> {
    if polygons.is_empty() {
        return None;
    }
    Some(sum_area(polygons, |_| true) / polygons.len() as f64)
}

/// Total area of polygons with exactly `vertexes` vertices
pub fn area_num(polygons: &[Polygon], vertexes: usize) -> f64 {
    sum_area(polygons, |p| p.vertex_count() == vertexes)
}

pub fn max_area(polygons: &[Polygon]) -> Option<f64> {
    polygons.iter().map(Polygon::area).reduce(f64::max)
}

pub fn min_area(polygons: &[Polygon]) -> Option<f64> {
    polygons.iter().map(Polygon::area).reduce(f64::min)
}

pub fn max_vertexes(polygons: &[Polygon]) -> Option<usize> {
    polygons.iter().map(Polygon::vertex_count).max()
}

pub fn min_vertexes(polygons: &[Polygon]) -> Option<usize> {
    polygons.iter().map(Polygon::vertex_count).min()
}

pub fn count_even(polygons: &[Polygon]) -> usize {
    polygons.iter().filter(|p| is_even(p)).count()
}

pub fn count_odd(polygons: &[Polygon]) -> usize {
    polygons.iter().filter(|p| !is_even(p)).count()
}

pub fn count_num(polygons: &[Polygon], vertexes: usize) -> usize {
    polygons
        .iter()
        .filter(|p| p.vertex_count() == vertexes)
        .count()
}

/// Number of polygons whose bounding box overlaps the probe's
pub fn count_intersections(polygons: &[Polygon], probe: &Polygon) -> usize {
    polygons.iter().filter(|p| p.intersects(probe)).count()
}

/// Remove repeated copies of `probe`, keeping its first occurrence
///
/// Polygons that differ from the probe are never touched and the relative
/// order of the survivors is preserved. Returns how many were removed.
pub fn remove_echoes(polygons: &mut Vec<Polygon>, probe: &Polygon) -> usize {
    let before = polygons.len();
    let mut seen = false;

    polygons.retain(|p| {
        if p != probe {
            return true;
        }
        let keep = !seen;
        seen = true;
        keep
    });

    before - polygons.len()
}
