//! End-to-end dispatch through the public library API.

use folio::clock::FixedClock;
use folio::content::{Line, Locale};
use folio::shell::Dispatcher;
use folio::shell::commands::LineKind;
use std::sync::Arc;

fn dispatcher() -> Dispatcher {
    let clock = FixedClock::parse("2026-10-16T10:00:00+02:00").unwrap();
    Dispatcher::with_clock(Arc::new(clock))
}

#[test]
fn test_walk_the_tree() {
    let d = dispatcher();
    let (result, _) = d.process("cd projects", "~", Locale::En, false);
    let cwd = result.new_path.expect("cd should move");
    assert_eq!(cwd, "~/projects");

    let (result, _) = d.process("ls", &cwd, Locale::En, false);
    assert_eq!(result.kind, LineKind::Output);
    let rows: Vec<String> = result.output.iter().map(|l| l.to_string()).collect();
    assert!(rows.iter().any(|r| r.ends_with("movie-app/")));
    assert!(rows.iter().all(|r| r.is_empty() || r.contains("Oct 16 2026")));

    let (result, _) = d.process("cd ..", &cwd, Locale::En, false);
    assert_eq!(result.new_path.as_deref(), Some("~"));
}

#[test]
fn test_language_switch_round_trip() {
    let d = dispatcher();
    let (result, locale) = d.process("lang IT", "~", Locale::En, false);
    assert_eq!(locale, Locale::It);
    assert_eq!(result.kind, LineKind::System);
    assert_eq!(result.output, vec![Line::text("Lingua cambiata in Italiano")]);

    let (result, locale) = d.process("whoami", "~", locale, false);
    assert_eq!(result.output, vec![Line::text("Sviluppatore Full Stack")]);

    let (result, still) = d.process("lang fr", "~", locale, false);
    assert!(result.is_error());
    assert_eq!(still, Locale::It);

    let (_, back) = d.process("language en", "~", still, false);
    assert_eq!(back, Locale::En);
}

#[test]
fn test_errors_never_panic_and_keep_state() {
    let d = dispatcher();
    for input in ["cd nowhere", "cat", "cat nope.txt", "ls ghost", "blog 1999-01-01", "xyzzy"] {
        let (result, locale) = d.process(input, "~", Locale::En, true);
        assert!(result.is_error(), "{} should be an error", input);
        assert_eq!(result.new_path, None);
        assert_eq!(locale, Locale::En);
    }
}

#[test]
fn test_json_shape() {
    let d = dispatcher();
    let (result, _) = d.process("cd projects", "~", Locale::En, false);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["type"], "output");
    assert_eq!(json["newPath"], "~/projects");
    assert!(json.get("shouldClear").is_none());

    let (result, _) = d.process("clear", "~", Locale::En, false);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["shouldClear"], true);
}

fn rows(d: &Dispatcher, input: &str, locale: Locale, narrow: bool) -> Vec<String> {
    let (result, _) = d.process(input, "~", locale, narrow);
    result.output.iter().map(|l| l.markup().into_owned()).collect()
}

#[test]
fn test_about_file_text_is_shared_by_both_languages() {
    let d = dispatcher();
    for locale in Locale::ALL {
        assert_eq!(
            rows(&d, "cat about.txt", locale, false),
            vec![
                "",
                "Full Stack Developer with 4+ years of education",
                "Passionate about creating scalable web applications",
                "Expert in React, Node.js, and cloud technologies",
                "",
            ]
        );
    }
}

#[test]
fn test_desktop_banner_text() {
    let rows: Vec<String> = folio::shell::welcome_message(Locale::En, false)
        .iter()
        .map(|l| l.markup().into_owned())
        .collect();
    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0], "");
    assert_eq!(rows[1], "┌─ Full Stack Developer Portfolio Terminal ─┐");
    assert_eq!(rows[5], "│  Type \"help\" to see available commands    │");
    assert_eq!(rows[8], "└───────────────────────────────────────────────┘");
    assert_eq!(rows[10], "System initialized. Ready for commands...");
    assert_eq!(rows[11], "");

    let it: Vec<String> = folio::shell::welcome_message(Locale::It, false)
        .iter()
        .map(|l| l.markup().into_owned())
        .collect();
    assert_eq!(it[1], "┌─ Portfolio Terminale Sviluppatore Full Stack ─┐");
    assert_eq!(it[5], "│  Digita \"help\" per vedere i comandi disponibili│");
}

#[test]
fn test_desktop_help_text() {
    let d = dispatcher();
    let help = rows(&d, "help", Locale::En, false);
    assert_eq!(help[3], "┌─ Portfolio Commands ───────────────────────────┐");
    assert_eq!(help[9], "│  contact    - Get my contact information     │");
    assert_eq!(help[10], "└──────────────────────────────────────────────────┘");
    assert!(help.iter().all(|r| !r.contains("blog")));

    let mobile = rows(&d, "help", Locale::En, true);
    assert!(mobile.contains(&"  • blog       - My last articles".to_string()));

    let aiuto = rows(&d, "help", Locale::It, false);
    assert_eq!(aiuto[3], "┌─ Comandi Portfolio ───────────────────────────┐");
}

#[test]
fn test_published_copy_is_kept_as_written() {
    let d = dispatcher();
    let about = rows(&d, "about", Locale::En, false);
    assert!(about.contains(
        &"Full Stack Developer with over 4 years of continuous learning and project development.".to_string()
    ));
    assert!(about.contains(&"  • Frontend: React, TypeScript, JavaScript, Html, CSS".to_string()));
    assert!(about.contains(&"  • Backend: Node.js, Python, mySQL".to_string()));

    let skills = rows(&d, "skills", Locale::It, false);
    assert_eq!(skills[1], "Technical Skills");
    assert!(skills.contains(&"  ▓▓▓░░ React.js             (Intermedio)".to_string()));

    let tree = rows(&d, "tree", Locale::En, false);
    assert!(tree.contains(&"│   ├── --/".to_string()));

    let post = rows(&d, "blog 2025-06-09", Locale::En, false);
    assert!(post.contains(
        &"but it might be the one with the most consequences — for better or worse.".to_string()
    ));
    let post = rows(&d, "blog 2025-04-15", Locale::It, false);
    assert!(post.contains(&"vita, salute e istruzione — e onestamente, me la sto cavando bene.".to_string()));

    let blog = rows(&d, "blog", Locale::It, false);
    assert_eq!(blog[0], "Personal Blog - Life beyond code");
}

#[test]
fn test_ls_accepts_relative_and_rooted_paths() {
    let d = dispatcher();
    let (root, _) = d.process("ls", "~", Locale::En, false);
    for (input, cwd) in [("ls /", "~/projects"), ("ls ..", "~/projects"), ("ls .", "~"), ("ls ~/", "~/experience")] {
        let (result, _) = d.process(input, cwd, Locale::En, false);
        assert_eq!(result.output, root.output, "{} from {}", input, cwd);
    }

    let (projects, _) = d.process("ls projects", "~", Locale::En, false);
    let (slashed, _) = d.process("ls projects/", "~", Locale::En, false);
    assert_eq!(slashed.kind, LineKind::Output);
    assert_eq!(slashed.output, projects.output);
}
