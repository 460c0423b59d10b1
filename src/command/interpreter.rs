use super::{AreaQuery, Command, CommandError, CountQuery, Extreme};
use crate::aggregate;
use crate::geometry::Polygon;

/// Render a query result with one fractional digit
pub fn format_result(value: f64) -> String {
    format!("{value:.1}")
}

/// Dispatches parsed commands against a polygon set
///
/// In permissive mode (the default) a verb outside the vocabulary is
/// accepted and produces no output. Strict mode reports it as
/// [`CommandError::UnknownCommand`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct Interpreter {
    strict: bool,
}

impl Interpreter {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Parse and run one command line
    ///
    /// Returns `Ok(None)` when the command succeeded but has nothing to print.
    /// The set is only modified by `RMECHO`.
    pub fn execute(
        &self,
        line: &str,
        polygons: &mut Vec<Polygon>,
    ) -> Result<Option<f64>, CommandError> {
        if polygons.is_empty() {
            return Err(CommandError::BadPolygons);
        }

        let command = Command::parse(line)?;
        self.apply(command, polygons)
    }

    /// Run an already parsed command
    pub fn apply(
        &self,
        command: Command,
        polygons: &mut Vec<Polygon>,
    ) -> Result<Option<f64>, CommandError> {
        if polygons.is_empty() {
            return Err(CommandError::BadPolygons);
        }

        let value = match command {
            Command::Area(query) => area(query, polygons)?,
            Command::Max(extreme) => max(extreme, polygons)?,
            Command::Min(extreme) => min(extreme, polygons)?,
            Command::Count(query) => count(query, polygons) as f64,
            Command::RmEcho(probe) => {
                let removed = aggregate::remove_echoes(polygons, &probe);
                tracing::debug!(removed, remaining = polygons.len(), "rmecho");
                removed as f64
            }
            Command::Intersections(probe) => {
                aggregate::count_intersections(polygons, &probe) as f64
            }
            Command::Unknown(verb) => {
                if self.strict {
                    return Err(CommandError::UnknownCommand(verb));
                }
                tracing::debug!(verb = %verb, "ignoring unknown command");
                return Ok(None);
            }
        };

        Ok(Some(value))
    }
}

fn area(query: AreaQuery, polygons: &[Polygon]) -> Result<f64, CommandError> {
    let value = match query {
        AreaQuery::Even => aggregate::area_even(polygons),
        AreaQuery::Odd => aggregate::area_odd(polygons),
        AreaQuery::Mean => aggregate::area_mean(polygons).ok_or(CommandError::BadPolygons)?,
        AreaQuery::Vertexes(n) => aggregate::area_num(polygons, n),
    };
    Ok(value)
}

fn max(extreme: Extreme, polygons: &[Polygon]) -> Result<f64, CommandError> {
    let value = match extreme {
        Extreme::Area => aggregate::max_area(polygons),
        Extreme::Vertexes => aggregate::max_vertexes(polygons).map(|n| n as f64),
    };
    value.ok_or(CommandError::BadPolygons)
}

fn min(extreme: Extreme, polygons: &[Polygon]) -> Result<f64, CommandError> {
    let value = match extreme {
        Extreme::Area => aggregate::min_area(polygons),
        Extreme::Vertexes => aggregate::min_vertexes(polygons).map(|n| n as f64),
    };
    value.ok_or(CommandError::BadPolygons)
}

fn count(query: CountQuery, polygons: &[Polygon]) -> usize {
    match query {
        CountQuery::Even => aggregate::count_even(polygons),
        CountQuery::Odd => aggregate::count_odd(polygons),
        CountQuery::Vertexes(n) => aggregate::count_num(polygons, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_polygon;

    fn square_and_triangle() -> Vec<Polygon> {
        vec![
            parse_polygon("4 (0;0) (0;2) (2;2) (2;0)").unwrap(),
            parse_polygon("3 (0;0) (4;0) (0;3)").unwrap(),
        ]
    }

    fn run(line: &str, polygons: &mut Vec<Polygon>) -> Result<Option<String>, CommandError> {
        Interpreter::default()
            .execute(line, polygons)
            .map(|value| value.map(format_result))
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(4.0), "4.0");
        assert_eq!(format_result(0.5), "0.5");
        assert_eq!(format_result(12.0 / 7.0), "1.7");
    }

    #[test]
    fn test_square_and_triangle_scenario() {
        let mut polygons = square_and_triangle();

        assert_eq!(run("AREA EVEN", &mut polygons).unwrap().unwrap(), "4.0");
        assert_eq!(run("AREA ODD", &mut polygons).unwrap().unwrap(), "6.0");
        assert_eq!(run("AREA MEAN", &mut polygons).unwrap().unwrap(), "5.0");
        assert_eq!(run("AREA 4", &mut polygons).unwrap().unwrap(), "4.0");
        assert_eq!(run("MAX VERTEXES", &mut polygons).unwrap().unwrap(), "4.0");
        assert_eq!(run("MIN VERTEXES", &mut polygons).unwrap().unwrap(), "3.0");
        assert_eq!(run("MAX AREA", &mut polygons).unwrap().unwrap(), "6.0");
        assert_eq!(run("MIN AREA", &mut polygons).unwrap().unwrap(), "4.0");
        assert_eq!(run("COUNT EVEN", &mut polygons).unwrap().unwrap(), "1.0");
        assert_eq!(run("COUNT ODD", &mut polygons).unwrap().unwrap(), "1.0");
    }

    #[test]
    fn test_count_absent_vertex_count() {
        let mut polygons = square_and_triangle();
        assert_eq!(run("COUNT 5", &mut polygons).unwrap().unwrap(), "0.0");
    }

    #[test]
    fn test_empty_set_rejects_everything() {
        let mut polygons = Vec::new();

        for line in ["AREA EVEN", "MAX AREA", "COUNT 3", "NOPE", "AREA XYZ"] {
            assert_eq!(run(line, &mut polygons), Err(CommandError::BadPolygons));
        }
    }

    #[test]
    fn test_unrecognised_option() {
        let mut polygons = square_and_triangle();
        assert!(matches!(
            run("AREA XYZ", &mut polygons),
            Err(CommandError::BadCommandType { .. })
        ));
    }

    #[test]
    fn test_unknown_verb_permissive_and_strict() {
        let mut polygons = square_and_triangle();

        assert_eq!(run("PERIMETER ALL", &mut polygons), Ok(None));
        assert_eq!(
            Interpreter::new(true).execute("PERIMETER ALL", &mut polygons),
            Err(CommandError::UnknownCommand("PERIMETER".to_string()))
        );
    }

    #[test]
    fn test_rmecho_mutates_set() {
        let mut polygons = square_and_triangle();
        polygons.push(polygons[0].clone());
        polygons.push(polygons[0].clone());

        let out = run("RMECHO 4 (0;0) (0;2) (2;2) (2;0)", &mut polygons).unwrap();
        assert_eq!(out.unwrap(), "2.0");
        assert_eq!(polygons, square_and_triangle());

        let out = run("RMECHO 4 (0;0) (0;2) (2;2) (2;0)", &mut polygons).unwrap();
        assert_eq!(out.unwrap(), "0.0");
    }

    #[test]
    fn test_intersections() {
        let mut polygons = square_and_triangle();

        let out = run("INTERSECTIONS 3 (3;2) (5;2) (5;5)", &mut polygons).unwrap();
        assert_eq!(out.unwrap(), "1.0");

        let out = run("INTERSECTIONS 3 (1;1) (1;2) (2;1)", &mut polygons).unwrap();
        assert_eq!(out.unwrap(), "2.0");

        assert!(matches!(
            run("INTERSECTIONS 3 (1;1) (1;2)", &mut polygons),
            Err(CommandError::BadPolygon(_))
        ));
    }
}
