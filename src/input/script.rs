use crate::controllers::interactive::ports::input_source::InputSource;
use crate::core::navigation::command::{Command, CommandParseError, parse_commands};

/// Replays a fixed list of commands for headless runs.
///
/// The first drain returns the whole script; every drain after that returns
/// [`Command::Terminate`], so a frame loop presents exactly one frame for the
/// scripted view and then stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedInput {
    commands: Option<Vec<Command>>,
}

impl InputSource for ScriptedInput {
    fn drain_commands(&mut self) -> Vec<Command> {
        self.commands
            .take()
            .unwrap_or_else(|| vec![Command::Terminate])
    }
}

impl ScriptedInput {
    #[must_use]
    pub fn new(commands: Vec<Command>) -> Self {
        Self {
            commands: Some(commands),
        }
    }

    pub fn parse(script: &str) -> Result<Self, CommandParseError> {
        parse_commands(script).map(Self::new)
    }
}
