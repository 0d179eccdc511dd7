// Cat command

use crate::content::Line;
use crate::shell::commands::{CommandResult, Executable};
use crate::shell::context::CommandContext;

pub struct CatCommand;
impl Executable for CatCommand {
    fn execute(&self, args: &[String], ctx: &CommandContext<'_>) -> CommandResult {
        let copy = ctx.copy();
        let Some(filename) = args.get(1) else {
            return CommandResult::error(copy.errors.cat_missing_operand);
        };

        match copy.file(filename) {
            Some(lines) => {
                let mut output = Vec::with_capacity(lines.len() + 2);
                output.push(Line::BLANK);
                output.extend_from_slice(lines);
                output.push(Line::BLANK);
                CommandResult::output(output)
            }
            None => CommandResult::error((copy.errors.cat_not_found)(filename)),
        }
    }
}
