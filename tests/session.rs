//! A visitor's session driven the way the interactive shell drives it.

use folio::clock::FixedClock;
use folio::config::{LogConfig, LogStrategy};
use folio::content::Locale;
use folio::logger::{Transcript, write_transcript};
use folio::session::Session;
use folio::shell::Dispatcher;
use folio::shell::commands::LineKind;
use folio::ui::history::Direction;
use folio::ui::onboarding::{FileFlagStore, Tour};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn session(locale: Locale) -> Session {
    let clock = FixedClock::parse("2026-10-16T10:00:00+02:00").unwrap();
    Session::new(Arc::new(Dispatcher::with_clock(Arc::new(clock))), locale, false)
}

#[test]
fn test_browsing_session() {
    let mut s = session(Locale::En);
    s.submit("cd experience");
    s.submit("ls");
    s.submit("cat about.txt");
    s.submit("nope");

    assert_eq!(s.prompt(), "~/experience $");
    let commands: Vec<String> = s
        .lines()
        .iter()
        .filter(|l| l.kind == LineKind::Command)
        .map(|l| l.line.to_string())
        .collect();
    assert_eq!(
        commands,
        vec!["~ $ cd experience", "~/experience $ ls", "~/experience $ cat about.txt", "~/experience $ nope"]
    );
    assert_eq!(s.stats().commands, 4);
    assert_eq!(s.stats().errors, 1);

    assert_eq!(s.recall(Direction::Up), "nope");
    assert_eq!(s.recall(Direction::Up), "cat about.txt");
    assert_eq!(s.recall(Direction::Down), "nope");
}

#[test]
fn test_tour_is_remembered_across_sessions() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state");

    let store = FileFlagStore::new(&state);
    let tour = Tour::load(&store).unwrap();
    let mut s = session(Locale::En).with_tour(tour, Box::new(store));
    assert!(s.tour().unwrap().is_visible());
    s.submit("help");
    assert!(!s.tour().unwrap().is_visible());

    let store = FileFlagStore::new(&state);
    assert!(!Tour::load(&store).unwrap().is_visible());
}

#[test]
fn test_transcript_for_error_session() {
    let dir = TempDir::new().unwrap();
    let mut s = session(Locale::It);
    s.submit("about");
    s.submit("boh");

    let config = LogConfig {
        strategy: LogStrategy::ErrorOnly,
        ..LogConfig::default()
    };
    let transcript = Transcript {
        locale: s.current_language(),
        narrow: s.is_narrow(),
        started_at: s.started_at(),
        ended_at: s.started_at(),
        rows: s.transcript(),
        stats: s.stats(),
    };
    let path = write_transcript(&transcript, &config, dir.path()).unwrap().unwrap();
    let body = fs::read_to_string(path).unwrap();
    assert!(body.contains("~ $ boh\n"));
    assert!(body.contains("Commands: 2\nErrors: 1\n"));
}
