// Cd command

use crate::content::Line;
use crate::shell::commands::{CommandResult, Executable};
use crate::shell::context::CommandContext;
use crate::vfs::{self, ROOT};

pub struct CdCommand;
impl Executable for CdCommand {
    fn execute(&self, args: &[String], ctx: &CommandContext<'_>) -> CommandResult {
        // args[0] is "cd". args[1] is path.
        let Some(arg) = args.get(1) else {
            return CommandResult::output(vec![Line::BLANK]).with_path(ROOT);
        };

        // `..` always succeeds, even from a path the tree does not know.
        if arg == ".." {
            return CommandResult::output(vec![Line::BLANK]).with_path(vfs::parent(ctx.cwd));
        }

        let new_path = vfs::resolve(ctx.cwd, arg);
        if ctx.fs.is_dir(&new_path) {
            CommandResult::output(vec![Line::BLANK]).with_path(new_path)
        } else {
            CommandResult::error((ctx.copy().errors.cd_not_found)(arg))
        }
    }
}
