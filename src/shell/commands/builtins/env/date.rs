use crate::clock::format_date;
use crate::content::Line;
use crate::shell::commands::{CommandResult, Executable};
use crate::shell::context::CommandContext;

pub struct DateCommand;
impl Executable for DateCommand {
    fn execute(&self, _args: &[String], ctx: &CommandContext<'_>) -> CommandResult {
        CommandResult::output(vec![Line::owned(format_date(&ctx.clock.now()))])
    }
}
