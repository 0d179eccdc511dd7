use crate::shell::commands::{CommandResult, Executable};
use crate::shell::context::CommandContext;

/// Asks the caller to reset its screen. The dispatcher keeps no history.
pub struct ClearCommand;
impl Executable for ClearCommand {
    fn execute(&self, _args: &[String], _ctx: &CommandContext<'_>) -> CommandResult {
        CommandResult::clear()
    }
}
