pub mod ast;
pub mod commands;
pub mod context;
pub mod parser;

use crate::clock::{Clock, SystemClock};
use crate::content::{Line, Locale};
use crate::vfs::VirtualFs;
use commands::{CommandResult, Executable};
use context::CommandContext;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

#[cfg(test)]
mod tests;

/// Maps one line of input to a [`CommandResult`].
///
/// Holds only immutable data: the command registry, the virtual tree and
/// the clock. Locale and path are passed in and handed back, so a single
/// dispatcher can serve any number of sessions.
pub struct Dispatcher {
    registry: HashMap<String, Box<dyn Executable>>,
    fs: VirtualFs,
    clock: Arc<dyn Clock>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let mut dispatcher = Self {
            registry: HashMap::new(),
            fs: VirtualFs::portfolio(),
            clock,
        };
        commands::builtins::register_all_builtins(&mut dispatcher);
        dispatcher
    }

    pub fn register_command(&mut self, name: &str, command: Box<dyn Executable>) {
        self.registry.insert(name.to_lowercase(), command);
    }

    pub fn is_registered(&self, verb: &str) -> bool {
        self.registry.contains_key(&verb.to_lowercase())
    }

    /// Registered verbs, sorted.
    pub fn verbs(&self) -> Vec<&str> {
        let mut verbs: Vec<&str> = self.registry.keys().map(String::as_str).collect();
        verbs.sort_unstable();
        verbs
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Runs `command` against `current_path` in `locale`.
    ///
    /// Returns the result together with the locale that is active
    /// afterwards (only `lang` changes it). Blank input yields an empty
    /// output result.
    pub fn process(
        &self,
        command: &str,
        current_path: &str,
        locale: Locale,
        narrow: bool,
    ) -> (CommandResult, Locale) {
        let Some(invocation) = parser::parse_command_line(command) else {
            return (CommandResult::output(Vec::new()), locale);
        };

        let ctx = CommandContext {
            cwd: current_path,
            locale,
            narrow,
            fs: &self.fs,
            clock: self.clock.as_ref(),
        };

        let verb = invocation.verb();
        let result = match self.registry.get(&verb) {
            Some(command) => {
                debug!("Dispatching '{}' at {} ({})", verb, current_path, locale);
                command.execute(&invocation.argv(), &ctx)
            }
            None => {
                debug!("Unknown command: {}", invocation.program);
                CommandResult::error((ctx.copy().errors.command_not_found)(&invocation.program))
            }
        };

        if result.is_error() {
            debug!("'{}' answered with an error", verb);
        }

        let next_locale = result.new_locale.unwrap_or(locale);
        (result, next_locale)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// The banner shown on start and after `clear`.
pub fn welcome_message(locale: Locale, narrow: bool) -> &'static [Line] {
    locale.commands().welcome.pick(narrow)
}
