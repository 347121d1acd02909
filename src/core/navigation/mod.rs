pub mod command;
pub mod limits;
pub mod navigate;

pub use command::{Command, CommandParseError, PanDirection, ZoomStep, parse_commands};
pub use limits::NavigationLimits;
pub use navigate::{NavigationReport, NavigationWarning, navigate};
