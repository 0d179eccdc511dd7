use crate::content::Section;
use crate::shell::commands::{CommandResult, Executable};
use crate::shell::context::CommandContext;

/// Prints one fixed portfolio block (`about`, `skills`, `tree`, ...).
pub struct SectionCommand(pub Section);

impl Executable for SectionCommand {
    fn execute(&self, _args: &[String], ctx: &CommandContext<'_>) -> CommandResult {
        CommandResult::output(ctx.copy().section(self.0).to_vec())
    }
}
