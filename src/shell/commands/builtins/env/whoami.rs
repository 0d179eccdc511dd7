use crate::content::Line;
use crate::shell::commands::{CommandResult, Executable};
use crate::shell::context::CommandContext;

pub struct WhoamiCommand;
impl Executable for WhoamiCommand {
    fn execute(&self, _args: &[String], ctx: &CommandContext<'_>) -> CommandResult {
        CommandResult::output(vec![Line::text(ctx.copy().whoami)])
    }
}
