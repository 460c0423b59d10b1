pub mod parser;

pub use parser::{
    ParseError, load_polygons, lossy_lines, parse_polygon, parse_polygon_tokens, parse_polygons,
};
