//! One visitor's terminal screen: scrollback, prompt, history and window
//! state wrapped around a shared [`Dispatcher`].

use crate::content::{Line, Locale};
use crate::shell::commands::LineKind;
use crate::shell::{welcome_message, Dispatcher};
use crate::ui::history::{Direction, History};
use crate::ui::menu::QuickMenu;
use crate::ui::onboarding::{FlagStore, Tour};
use crate::ui::view::TerminalView;
use crate::vfs::ROOT;
use chrono::{DateTime, FixedOffset};
use log::{debug, warn};
use serde::Serialize;
use std::sync::Arc;

/// A row of the scrollback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminalLine {
    #[serde(rename = "type")]
    pub kind: LineKind,
    pub line: Line,
}

impl TerminalLine {
    pub fn new(kind: LineKind, line: Line) -> Self {
        Self { kind, line }
    }
}

/// Running totals kept for the transcript footer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub commands: usize,
    pub errors: usize,
}

struct Onboarding {
    tour: Tour,
    store: Box<dyn FlagStore>,
}

pub struct Session {
    dispatcher: Arc<Dispatcher>,
    locale: Locale,
    cwd: String,
    narrow: bool,
    history: History,
    view: TerminalView,
    menu: QuickMenu,
    input: String,
    lines: Vec<TerminalLine>,
    welcome: Vec<TerminalLine>,
    onboarding: Option<Onboarding>,
    transcript: Vec<TerminalLine>,
    stats: SessionStats,
    started_at: DateTime<FixedOffset>,
}

fn welcome_lines(locale: Locale, narrow: bool) -> Vec<TerminalLine> {
    welcome_message(locale, narrow)
        .iter()
        .cloned()
        .map(|line| TerminalLine::new(LineKind::System, line))
        .collect()
}

impl Session {
    pub fn new(dispatcher: Arc<Dispatcher>, locale: Locale, narrow: bool) -> Self {
        let welcome = welcome_lines(locale, narrow);
        let started_at = dispatcher.clock().now();
        Self {
            dispatcher,
            locale,
            cwd: ROOT.to_string(),
            narrow,
            history: History::default(),
            view: TerminalView::default(),
            menu: QuickMenu::default(),
            input: String::new(),
            lines: welcome.clone(),
            transcript: welcome.clone(),
            welcome,
            onboarding: None,
            stats: SessionStats::default(),
            started_at,
        }
    }

    /// Attaches the first-run tour. Running any command dismisses it.
    pub fn with_tour(mut self, tour: Tour, store: Box<dyn FlagStore>) -> Self {
        self.onboarding = Some(Onboarding { tour, store });
        self
    }

    /// Runs one line of input and appends what it printed.
    pub fn submit(&mut self, input: &str) {
        if input.trim().is_empty() {
            return;
        }

        self.dismiss_tour();
        self.view = self.view.on_command();
        self.history.push(input);
        self.history.reset_cursor();
        self.input.clear();

        let (result, locale) = self
            .dispatcher
            .process(input, &self.cwd, self.locale, self.narrow);

        self.stats.commands += 1;
        if result.is_error() {
            self.stats.errors += 1;
        }

        let command_row = TerminalLine::new(
            LineKind::Command,
            Line::owned(format!("{} $ {}", self.cwd, input)),
        );
        self.transcript.push(command_row.clone());

        if result.should_clear {
            debug!("Clearing scrollback");
            self.lines = self.welcome.clone();
            return;
        }

        let rows: Vec<TerminalLine> = result
            .output
            .into_iter()
            .map(|line| TerminalLine::new(result.kind, line))
            .collect();
        self.transcript.extend(rows.iter().cloned());
        self.lines.push(command_row);
        self.lines.extend(rows);

        if let Some(path) = result.new_path {
            self.cwd = path;
        }
        if locale != self.locale {
            self.locale = locale;
            self.welcome = welcome_lines(locale, self.narrow);
        }
    }

    fn dismiss_tour(&mut self) {
        if let Some(onboarding) = self.onboarding.as_mut() {
            if onboarding.tour.is_visible() {
                if let Err(err) = onboarding.tour.dismiss(onboarding.store.as_mut()) {
                    warn!("Could not persist onboarding state: {:#}", err);
                }
            }
        }
    }

    /// Viewport crossed the breakpoint: the banner is rebuilt and the
    /// scrollback starts over.
    pub fn set_narrow(&mut self, narrow: bool) {
        if narrow == self.narrow {
            return;
        }
        self.narrow = narrow;
        self.welcome = welcome_lines(self.locale, narrow);
        self.lines = self.welcome.clone();
    }

    pub fn current_language(&self) -> Locale {
        self.locale
    }

    pub fn welcome_message(&self) -> &[TerminalLine] {
        &self.welcome
    }

    pub fn prompt(&self) -> String {
        format!("{} $", self.cwd)
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn is_narrow(&self) -> bool {
        self.narrow
    }

    pub fn lines(&self) -> &[TerminalLine] {
        &self.lines
    }

    /// Everything shown since the session started, `clear` included.
    pub fn transcript(&self) -> &[TerminalLine] {
        &self.transcript
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn started_at(&self) -> DateTime<FixedOffset> {
        self.started_at
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Arrow keys: replaces the input with a history entry.
    pub fn recall(&mut self, direction: Direction) -> &str {
        self.input = self.history.navigate(direction);
        &self.input
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn view(&self) -> TerminalView {
        self.view
    }

    pub fn close(&mut self) {
        self.view = self.view.close();
    }

    pub fn toggle_minimize(&mut self) {
        self.view = self.view.toggle_minimize();
    }

    pub fn toggle_maximize(&mut self) {
        self.view = self.view.toggle_maximize();
    }

    pub fn restore(&mut self) {
        self.view = self.view.restore();
    }

    pub fn menu(&self) -> &QuickMenu {
        &self.menu
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    /// Runs quick menu entry `index`. Returns the command that ran.
    pub fn menu_select(&mut self, index: usize) -> Option<String> {
        let command = self.menu.select(self.locale, index)?;
        self.submit(&command);
        Some(command)
    }

    pub fn tour(&self) -> Option<&Tour> {
        self.onboarding.as_ref().map(|o| &o.tour)
    }

    pub fn tour_mut(&mut self) -> Option<&mut Tour> {
        self.onboarding.as_mut().map(|o| &mut o.tour)
    }

    /// Skip or done on the tour card.
    pub fn finish_tour(&mut self) {
        self.dismiss_tour();
    }
}
