use crate::core::navigation::command::Command;

/// Produces navigation commands, e.g. from window events or a script.
pub trait InputSource {
    /// Returns every command queued since the last call, oldest first.
    fn drain_commands(&mut self) -> Vec<Command>;
}
