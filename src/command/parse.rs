use super::CommandError;
use crate::geometry::Polygon;
use crate::geometry::polygon::MIN_VERTICES;
use crate::input::parse_polygon_tokens;

/// Option of the `AREA` verb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaQuery {
    Even,
    Odd,
    Mean,
    Vertexes(usize),
}

/// Option of the `COUNT` verb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountQuery {
    Even,
    Odd,
    Vertexes(usize),
}

/// Option of the `MAX` and `MIN` verbs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Area,
    Vertexes,
}

/// A fully resolved command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Area(AreaQuery),
    Max(Extreme),
    Min(Extreme),
    Count(CountQuery),
    RmEcho(Polygon),
    Intersections(Polygon),
    /// Verb outside the vocabulary, kept so the caller can choose to ignore it
    Unknown(String),
}

impl Command {
    /// Resolve `<VERB> <OPTION>` into a command
    ///
    /// Options are matched exactly first; `AREA` and `COUNT` then fall back
    /// to reading the option as a vertex count. For `RMECHO` and
    /// `INTERSECTIONS` the option token opens the probe polygon descriptor,
    /// which runs to the end of the line.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next().ok_or(CommandError::EmptyCommand)?;

        let command = match verb {
            "AREA" => {
                let option = tokens.next().unwrap_or_default();
                let query = match option {
                    "EVEN" => AreaQuery::Even,
                    "ODD" => AreaQuery::Odd,
                    "MEAN" => AreaQuery::Mean,
                    _ => AreaQuery::Vertexes(vertex_option(verb, option)?),
                };
                expect_end(tokens, verb, option)?;
                Command::Area(query)
            }
            "MAX" | "MIN" => {
                let option = tokens.next().unwrap_or_default();
                let extreme = match option {
                    "AREA" => Extreme::Area,
                    "VERTEXES" => Extreme::Vertexes,
                    _ => return Err(bad_type(verb, option)),
                };
                expect_end(tokens, verb, option)?;
                if verb == "MAX" {
                    Command::Max(extreme)
                } else {
                    Command::Min(extreme)
                }
            }
            "COUNT" => {
                let option = tokens.next().unwrap_or_default();
                let query = match option {
                    "EVEN" => CountQuery::Even,
                    "ODD" => CountQuery::Odd,
                    _ => CountQuery::Vertexes(vertex_option(verb, option)?),
                };
                expect_end(tokens, verb, option)?;
                Command::Count(query)
            }
            "RMECHO" => Command::RmEcho(parse_polygon_tokens(tokens)?),
            "INTERSECTIONS" => Command::Intersections(parse_polygon_tokens(tokens)?),
            other => Command::Unknown(other.to_string()),
        };

        Ok(command)
    }
}

fn bad_type(verb: &str, option: &str) -> CommandError {
    CommandError::BadCommandType {
        verb: verb.to_string(),
        option: option.to_string(),
    }
}

/// Numeric fallback: a non-number is a bad option, a small number a bad parameter
fn vertex_option(verb: &str, option: &str) -> Result<usize, CommandError> {
    let value: i64 = option.parse().map_err(|_| bad_type(verb, option))?;
    if value < MIN_VERTICES as i64 {
        return Err(CommandError::BadParameter(value));
    }
    usize::try_from(value).map_err(|_| CommandError::BadParameter(value))
}

fn expect_end<'a>(
    mut rest: impl Iterator<Item = &'a str>,
    verb: &str,
    option: &str,
) -> Result<(), CommandError> {
    match rest.next() {
        None => Ok(()),
        Some(extra) => Err(bad_type(verb, &format!("{option} {extra}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ParseError, parse_polygon};

    #[test]
    fn test_exact_options() {
        assert_eq!(
            Command::parse("AREA EVEN").unwrap(),
            Command::Area(AreaQuery::Even)
        );
        assert_eq!(
            Command::parse("AREA MEAN").unwrap(),
            Command::Area(AreaQuery::Mean)
        );
        assert_eq!(
            Command::parse("MAX VERTEXES").unwrap(),
            Command::Max(Extreme::Vertexes)
        );
        assert_eq!(
            Command::parse("  MIN   AREA ").unwrap(),
            Command::Min(Extreme::Area)
        );
        assert_eq!(
            Command::parse("COUNT ODD").unwrap(),
            Command::Count(CountQuery::Odd)
        );
    }

    #[test]
    fn test_numeric_fallback() {
        assert_eq!(
            Command::parse("AREA 3").unwrap(),
            Command::Area(AreaQuery::Vertexes(3))
        );
        assert_eq!(
            Command::parse("COUNT 12").unwrap(),
            Command::Count(CountQuery::Vertexes(12))
        );
    }

    #[test]
    fn test_numeric_out_of_range() {
        assert_eq!(
            Command::parse("AREA 2"),
            Err(CommandError::BadParameter(2))
        );
        assert_eq!(
            Command::parse("COUNT 0"),
            Err(CommandError::BadParameter(0))
        );
        assert_eq!(
            Command::parse("COUNT -4"),
            Err(CommandError::BadParameter(-4))
        );
    }

    #[test]
    fn test_bad_command_type() {
        assert!(matches!(
            Command::parse("AREA XYZ"),
            Err(CommandError::BadCommandType { .. })
        ));
        assert!(matches!(
            Command::parse("COUNT MEAN"),
            Err(CommandError::BadCommandType { .. })
        ));
        assert!(matches!(
            Command::parse("AREA 5x"),
            Err(CommandError::BadCommandType { .. })
        ));
        // MAX and MIN have no numeric fallback
        assert!(matches!(
            Command::parse("MAX 4"),
            Err(CommandError::BadCommandType { .. })
        ));
        assert!(matches!(
            Command::parse("AREA EVEN ODD"),
            Err(CommandError::BadCommandType { .. })
        ));
    }

    #[test]
    fn test_missing_option() {
        assert_eq!(
            Command::parse("AREA"),
            Err(CommandError::BadCommandType {
                verb: "AREA".to_string(),
                option: String::new(),
            })
        );
        assert!(matches!(
            Command::parse("MIN"),
            Err(CommandError::BadCommandType { .. })
        ));
        assert_eq!(
            Command::parse("RMECHO"),
            Err(CommandError::BadPolygon(ParseError::MissingVertexCount))
        );
    }

    #[test]
    fn test_probe_commands() {
        let probe = parse_polygon("3 (0;0) (1;0) (0;1)").unwrap();

        assert_eq!(
            Command::parse("RMECHO 3 (0;0) (1;0) (0;1)").unwrap(),
            Command::RmEcho(probe.clone())
        );
        assert_eq!(
            Command::parse("INTERSECTIONS 3 (0;0) (1;0) (0;1)").unwrap(),
            Command::Intersections(probe)
        );
        assert!(matches!(
            Command::parse("INTERSECTIONS 4 (0;0) (1;0) (0;1)"),
            Err(CommandError::BadPolygon(_))
        ));
    }

    #[test]
    fn test_unknown_and_empty() {
        assert_eq!(
            Command::parse("ECHO 3").unwrap(),
            Command::Unknown("ECHO".to_string())
        );
        assert_eq!(Command::parse("   "), Err(CommandError::EmptyCommand));
    }
}
