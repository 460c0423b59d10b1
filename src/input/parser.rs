use crate::geometry::polygon::MIN_VERTICES;
use crate::geometry::{Point, Polygon, PolygonSet};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Why a polygon descriptor was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing vertex count")]
    MissingVertexCount,

    #[error("invalid vertex count: {0:?}")]
    InvalidVertexCount(String),

    #[error("a polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("expected {expected} vertices, found {found}")]
    VertexCountMismatch { expected: usize, found: usize },

    #[error("invalid point: {0:?}")]
    InvalidPoint(String),
}

/// Parse a single descriptor occupying the whole of `line`
///
/// # Format
/// `<N> (x;y) (x;y) ...` with exactly `N` points. Either `;` or `,` may
/// separate the two coordinates of a pair.
pub fn parse_polygon(line: &str) -> Result<Polygon, ParseError> {
    parse_polygon_tokens(line.split_whitespace())
}

/// Parse a descriptor from an already tokenised stream
///
/// All remaining tokens are consumed; anything past the `N` declared
/// points makes the descriptor invalid.
pub fn parse_polygon_tokens<'a, I>(tokens: I) -> Result<Polygon, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tokens = tokens.into_iter();

    let count_token = tokens.next().ok_or(ParseError::MissingVertexCount)?;
    let expected: usize = count_token
        .parse()
        .map_err(|_| ParseError::InvalidVertexCount(count_token.to_string()))?;
    if expected < MIN_VERTICES {
        return Err(ParseError::TooFewVertices(expected));
    }

    let points = tokens.map(parse_point).collect::<Result<Vec<_>, _>>()?;
    if points.len() != expected {
        return Err(ParseError::VertexCountMismatch {
            expected,
            found: points.len(),
        });
    }

    Polygon::new(points).ok_or(ParseError::TooFewVertices(expected))
}

fn parse_point(token: &str) -> Result<Point, ParseError> {
    let invalid = || ParseError::InvalidPoint(token.to_string());

    let inner = token
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .ok_or_else(invalid)?;
    let (x, y) = inner.split_once([';', ',']).ok_or_else(invalid)?;

    let x = x.parse().map_err(|_| invalid())?;
    let y = y.parse().map_err(|_| invalid())?;

    Ok(Point::new(x, y))
}

/// Split `reader` into lines without failing on invalid UTF-8
///
/// Bad bytes become U+FFFD so the line is rejected by the parser instead of
/// ending the read. Trailing `\r\n` or `\n` is stripped.
pub fn lossy_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.split(b'\n').map(|line| {
        let mut bytes = line?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    })
}

/// Read one descriptor per line
///
/// Blank lines are skipped. Malformed lines, including ones that are not
/// valid UTF-8, are logged and dropped so a single bad record does not
/// discard the rest of the input.
pub fn parse_polygons<R: BufRead>(reader: R) -> Result<PolygonSet> {
    let mut polygons = Vec::new();

    for (index, line) in lossy_lines(reader).enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", index + 1))?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_polygon(&line) {
            Ok(polygon) => polygons.push(polygon),
            Err(e) => tracing::warn!(line = index + 1, error = %e, "skipping polygon"),
        }
    }

    tracing::debug!(count = polygons.len(), "polygons loaded");
    Ok(polygons)
}

/// Load polygons from a file on disk
pub fn load_polygons(path: &Path) -> Result<PolygonSet> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open polygon file: {}", path.display()))?;
    parse_polygons(BufReader::new(file))
        .with_context(|| format!("Failed to read polygon file: {}", path.display()))
}
