use crate::shell::commands::{CommandResult, Executable};
use crate::shell::context::CommandContext;

pub struct HelpCommand;
impl Executable for HelpCommand {
    fn execute(&self, _args: &[String], ctx: &CommandContext<'_>) -> CommandResult {
        CommandResult::system(ctx.copy().help.pick(ctx.narrow).to_vec())
    }
}
