use crate::clock::Clock;
use crate::content::{CommandCopy, Locale};
use crate::vfs::VirtualFs;

/// Everything a handler may read while running one command.
///
/// Borrowed for the duration of a single dispatch; handlers never mutate
/// it. Path and locale changes travel back in the `CommandResult`.
pub struct CommandContext<'a> {
    pub cwd: &'a str,
    pub locale: Locale,
    pub narrow: bool,
    pub fs: &'a VirtualFs,
    pub clock: &'a dyn Clock,
}

impl<'a> CommandContext<'a> {
    pub fn copy(&self) -> &'static CommandCopy {
        self.locale.commands()
    }
}
