pub mod bounds;
pub mod point;
pub mod polygon;

pub use bounds::Bounds;
pub use point::Point;
pub use polygon::{Polygon, PolygonSet};
