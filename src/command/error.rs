use crate::input::ParseError;
use thiserror::Error;

/// Reasons a single command is rejected
///
/// Every variant aborts only the command that produced it. The caller
/// decides whether to go on with the next one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The polygon set is empty
    #[error("no polygons to query")]
    BadPolygons,

    /// Known verb with an option it does not accept
    #[error("unrecognised option {option:?} for {verb}")]
    BadCommandType { verb: String, option: String },

    /// Probe polygon of RMECHO/INTERSECTIONS could not be parsed
    #[error("bad probe polygon: {0}")]
    BadPolygon(#[from] ParseError),

    /// Numeric option outside the accepted vertex range
    #[error("vertex count must be at least 3, got {0}")]
    BadParameter(i64),

    /// Verb not in the vocabulary (strict mode only)
    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    /// Line with no verb at all
    #[error("empty command")]
    EmptyCommand,
}
