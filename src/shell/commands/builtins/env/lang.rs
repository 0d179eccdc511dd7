// Lang command

use crate::content::{Line, Locale};
use crate::shell::commands::{CommandResult, Executable};
use crate::shell::context::CommandContext;
use log::info;

/// `lang`, `lang en`, `lang it`. The only command that changes session
/// state; the new locale is carried in the result.
pub struct LangCommand;
impl Executable for LangCommand {
    fn execute(&self, args: &[String], ctx: &CommandContext<'_>) -> CommandResult {
        let Some(requested) = args.get(1) else {
            let status = (ctx.copy().language.current)(ctx.locale);
            return CommandResult::system(vec![Line::owned(status)]);
        };

        match Locale::parse(requested) {
            Some(locale) => {
                info!("Language switched {} -> {}", ctx.locale, locale);
                CommandResult::system(vec![Line::text(locale.commands().language.changed)])
                    .with_locale(locale)
            }
            None => CommandResult::error(ctx.copy().language.unsupported),
        }
    }
}
