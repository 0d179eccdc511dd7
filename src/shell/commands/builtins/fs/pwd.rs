use crate::content::Line;
use crate::shell::commands::{CommandResult, Executable};
use crate::shell::context::CommandContext;

pub struct PwdCommand;
impl Executable for PwdCommand {
    fn execute(&self, _args: &[String], ctx: &CommandContext<'_>) -> CommandResult {
        CommandResult::output(vec![Line::owned(ctx.cwd)])
    }
}
