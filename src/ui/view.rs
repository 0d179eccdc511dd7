use crate::content::ContentTable;

/// Window state of the simulated terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalView {
    #[default]
    Normal,
    Hidden,
    Minimized,
    Compact,
}

impl TerminalView {
    /// Close button.
    pub fn close(self) -> Self {
        TerminalView::Hidden
    }

    pub fn toggle_minimize(self) -> Self {
        if self == TerminalView::Minimized {
            TerminalView::Normal
        } else {
            TerminalView::Minimized
        }
    }

    pub fn toggle_maximize(self) -> Self {
        if self == TerminalView::Compact {
            TerminalView::Normal
        } else {
            TerminalView::Compact
        }
    }

    pub fn restore(self) -> Self {
        TerminalView::Normal
    }

    /// Typing a command brings a hidden or minimized window back.
    pub fn on_command(self) -> Self {
        match self {
            TerminalView::Hidden | TerminalView::Minimized => TerminalView::Normal,
            other => other,
        }
    }

    /// Whether the scrollback is visible at all.
    pub fn shows_output(self) -> bool {
        matches!(self, TerminalView::Normal | TerminalView::Compact)
    }

    /// Placeholder message and the label of the button that undoes it.
    pub fn banner(self, table: &'static ContentTable) -> Option<(&'static str, &'static str)> {
        let ui = &table.terminal;
        match self {
            TerminalView::Hidden => Some((ui.hidden_message, ui.reopen_label)),
            TerminalView::Minimized => Some((ui.minimized_message, ui.restore_label)),
            _ => None,
        }
    }

    /// Accessible labels of the close, minimize and maximize buttons.
    pub fn header_labels(self, table: &'static ContentTable) -> [&'static str; 3] {
        let header = &table.header;
        [
            header.close_aria,
            header.minimize_aria.pick(self == TerminalView::Minimized),
            header.compact_aria.pick(self == TerminalView::Compact),
        ]
    }
}
