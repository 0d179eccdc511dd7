// Blog command

use crate::shell::commands::{CommandResult, Executable};
use crate::shell::context::CommandContext;

/// `blog` prints the index, `blog <date>` one entry.
pub struct BlogCommand;
impl Executable for BlogCommand {
    fn execute(&self, args: &[String], ctx: &CommandContext<'_>) -> CommandResult {
        let blog = &ctx.copy().blog;
        let Some(date) = args.get(1) else {
            return CommandResult::output(blog.list.to_vec());
        };

        match blog.entry(date) {
            Some(lines) => CommandResult::output(lines.to_vec()),
            None => CommandResult::error((blog.not_found)(date)),
        }
    }
}
