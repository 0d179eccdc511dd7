pub mod builtins;

use crate::content::{Line, Locale};
use crate::shell::context::CommandContext;
use serde::Serialize;

/// How a row is styled by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// The echoed prompt and input. Only produced by the session screen.
    Command,
    Output,
    Error,
    System,
}

/// What one command produced.
///
/// User mistakes are ordinary results with `kind == Error`; handlers never
/// fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult {
    pub output: Vec<Line>,
    #[serde(rename = "type")]
    pub kind: LineKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_path: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub should_clear: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_locale: Option<Locale>,
}

impl CommandResult {
    fn new(output: Vec<Line>, kind: LineKind) -> Self {
        Self {
            output,
            kind,
            new_path: None,
            should_clear: false,
            new_locale: None,
        }
    }

    pub fn output(output: Vec<Line>) -> Self {
        Self::new(output, LineKind::Output)
    }

    pub fn system(output: Vec<Line>) -> Self {
        Self::new(output, LineKind::System)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(vec![Line::owned(message)], LineKind::Error)
    }

    pub fn clear() -> Self {
        Self {
            should_clear: true,
            ..Self::system(Vec::new())
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.new_path = Some(path.into());
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.new_locale = Some(locale);
        self
    }

    pub fn is_error(&self) -> bool {
        self.kind == LineKind::Error
    }
}

pub trait Executable: Send + Sync {
    /// `args[0]` is the program name as typed.
    fn execute(&self, args: &[String], ctx: &CommandContext<'_>) -> CommandResult;
}
