use crate::content::{Effect, Line};
use crate::shell::commands::{CommandResult, Executable};
use crate::shell::context::CommandContext;

/// Hidden command. The renderer swaps the effect line for an animation.
pub struct NicoCommand;
impl Executable for NicoCommand {
    fn execute(&self, _args: &[String], _ctx: &CommandContext<'_>) -> CommandResult {
        CommandResult::output(vec![Line::effect(Effect::Nico)])
    }
}
