// Ls command

use crate::clock::format_stamp;
use crate::content::Line;
use crate::shell::commands::{CommandResult, Executable};
use crate::shell::context::CommandContext;
use crate::vfs::{self, is_dir_entry};

pub struct LsCommand;
impl Executable for LsCommand {
    fn execute(&self, args: &[String], ctx: &CommandContext<'_>) -> CommandResult {
        let target = args.get(1).map(String::as_str);
        let path = match target {
            Some(arg) => vfs::resolve(ctx.cwd, arg),
            None => vfs::normalize(ctx.cwd),
        };

        let Some(dir) = ctx.fs.dir(&path) else {
            let shown = target.unwrap_or(ctx.cwd);
            return CommandResult::error((ctx.copy().errors.ls_not_found)(shown));
        };

        let stamp = format_stamp(&ctx.clock.now());
        let mut output = Vec::with_capacity(dir.children.len() + 2);
        output.push(Line::BLANK);
        for name in &dir.children {
            output.push(Line::owned(long_listing(name, &stamp)));
        }
        output.push(Line::BLANK);

        CommandResult::output(output)
    }
}

/// One `ls -l` row. Sizes and owners are decorative.
fn long_listing(name: &str, stamp: &str) -> String {
    if is_dir_entry(name) {
        format!("drwxr-xr-x  2 user user  4096 {} {}", stamp, name)
    } else {
        format!("-rw-r--r--  1 user user  1024 {} {}", stamp, name)
    }
}
