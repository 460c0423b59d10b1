pub mod error;
pub mod interpreter;
pub mod parse;
pub mod session;

pub use error::CommandError;
pub use interpreter::{Interpreter, format_result};
pub use parse::{AreaQuery, Command, CountQuery, Extreme};
pub use session::{INVALID_COMMAND, SessionStats, run_session};
