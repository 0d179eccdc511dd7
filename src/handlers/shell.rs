use anyhow::{Context, Result};
use colored::*;
use folio::config::FolioConfig;
use folio::logger::{Transcript, write_transcript};
use folio::render::Renderer;
use folio::session::Session;
use folio::shell::Dispatcher;
use folio::shell::parser::parse_command_line;
use folio::ui::completion::{complete, suggestions};
use folio::ui::history::Direction;
use folio::ui::menu::nav_links;
use folio::ui::onboarding::{FileFlagStore, Tour};
use log::{debug, warn};
use std::env;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use super::tour::{TourAction, handle_tour_key, print_card};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Window and editor actions that a browser would bind to buttons and keys.
enum Meta<'a> {
    Close,
    Minimize,
    Maximize,
    Restore,
    Menu(Option<usize>),
    Recall(Direction),
    Complete(&'a str),
    Tour,
    Quit,
    Unknown(&'a str),
}

fn parse_meta(line: &str) -> Option<Meta<'_>> {
    let rest = line.trim().strip_prefix(':')?;
    let (name, arg) = rest.split_once(' ').unwrap_or((rest, ""));
    let arg = arg.trim();
    Some(match name {
        "close" => Meta::Close,
        "min" => Meta::Minimize,
        "max" => Meta::Maximize,
        "restore" => Meta::Restore,
        "menu" => Meta::Menu(arg.parse::<usize>().ok().and_then(|n| n.checked_sub(1))),
        "up" => Meta::Recall(Direction::Up),
        "down" => Meta::Recall(Direction::Down),
        "tab" => Meta::Complete(arg),
        "tour" => Meta::Tour,
        "quit" | "q" => Meta::Quit,
        other => Meta::Unknown(other),
    })
}

/// The verb as the dispatcher will see it, quotes and all.
fn typed_verb(line: &str) -> Option<String> {
    parse_command_line(line).map(|invocation| invocation.program)
}

struct Screen {
    renderer: Renderer,
    printed: usize,
}

impl Screen {
    /// Prints rows added since the last call, or everything after a reset.
    fn sync(&mut self, session: &Session) -> Result<()> {
        let mut out = io::stdout().lock();
        if let Some((message, label)) = session.view().banner(session.current_language().table()) {
            writeln!(out, "{} {}", message.dimmed(), format!("[:restore {}]", label).cyan())?;
            self.printed = 0;
            return Ok(());
        }

        let lines = session.lines();
        if self.printed == 0 || lines.len() <= self.printed {
            write!(out, "{}", CLEAR_SCREEN)?;
            self.printed = 0;
        }
        self.renderer.write_rows(&mut out, &lines[self.printed..])?;
        self.printed = lines.len();
        Ok(())
    }

    fn redraw(&mut self, session: &Session) -> Result<()> {
        self.printed = 0;
        self.sync(session)
    }
}

fn print_menu(session: &Session) {
    for (i, link) in nav_links(session.current_language()).iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).cyan(), link.label);
    }
    println!("{}", "Pick one with :menu <n>".dimmed());
}

pub fn handle_shell(config: &FolioConfig, no_tour: bool) -> Result<()> {
    let dispatcher = Arc::new(Dispatcher::new());
    let mut session = Session::new(dispatcher, config.terminal.locale, config.is_narrow());

    if config.onboarding.enabled && !no_tour {
        let store = FileFlagStore::new(&config.onboarding.state_file);
        let tour = Tour::load(&store)?;
        session = session.with_tour(tour, Box::new(store));
    }

    let mut screen = Screen {
        renderer: Renderer::new(config.terminal.animate),
        printed: 0,
    };
    screen.sync(&session)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if let Some(tour) = session.tour().filter(|t| t.is_visible()) {
            print_card(&tour.card());
        }

        print!("{} ", session.prompt().green());
        if !session.input().is_empty() {
            print!("{}", format!("[{}] ", session.input()).dimmed());
        }
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let mut line = line.context("Failed to read input")?;

        // An empty line re-runs whatever history recall or completion
        // put into the buffer.
        if line.trim().is_empty() && !session.input().is_empty() {
            line = session.input().to_string();
        }

        if let Some(tour) = session.tour_mut().filter(|t| t.is_visible()) {
            match handle_tour_key(tour, &line) {
                TourAction::Continue => continue,
                TourAction::Finish => {
                    session.finish_tour();
                    continue;
                }
                TourAction::Passthrough => {}
            }
        }

        if let Some(meta) = parse_meta(&line) {
            match meta {
                Meta::Close => session.close(),
                Meta::Minimize => session.toggle_minimize(),
                Meta::Maximize => session.toggle_maximize(),
                Meta::Restore => {
                    session.restore();
                    screen.redraw(&session)?;
                    continue;
                }
                Meta::Menu(None) => {
                    session.toggle_menu();
                    if session.menu().is_open() {
                        print_menu(&session);
                    }
                    continue;
                }
                Meta::Menu(Some(index)) => {
                    if session.menu_select(index).is_none() {
                        warn!("No menu entry {}", index + 1);
                    }
                }
                Meta::Recall(direction) => {
                    session.recall(direction);
                    continue;
                }
                Meta::Complete(prefix) => {
                    if let Some(verb) = complete(prefix) {
                        session.set_input(verb);
                    }
                    continue;
                }
                Meta::Tour => {
                    if let Some(tour) = session.tour() {
                        print_card(&tour.card());
                    }
                    continue;
                }
                Meta::Quit => break,
                Meta::Unknown(name) => {
                    println!("{} unknown control :{}", "⚠️".yellow(), name);
                    continue;
                }
            }
            screen.sync(&session)?;
            continue;
        }

        let verb = typed_verb(&line);
        session.submit(&line);
        screen.sync(&session)?;

        if let Some(verb) = verb.filter(|v| !session.dispatcher().is_registered(v)) {
            let hints = suggestions(&verb);
            if !hints.is_empty() {
                let label = session.current_language().table().terminal.suggestions_label;
                println!("{} {}", label.dimmed(), hints.join("  ").cyan());
            }
        }
    }

    let ended_at = session.dispatcher().clock().now();
    let transcript = Transcript {
        locale: session.current_language(),
        narrow: session.is_narrow(),
        started_at: session.started_at(),
        ended_at,
        rows: session.transcript(),
        stats: session.stats(),
    };
    if let Some(path) = write_transcript(&transcript, &config.log, &env::current_dir()?)? {
        eprintln!("{} Transcript saved: {}", "📝".cyan(), path.display());
    }
    debug!("Session closed after {} commands", session.stats().commands);

    Ok(())
}
