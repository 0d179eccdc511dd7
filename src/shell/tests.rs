use crate::clock::FixedClock;
use crate::content::{Effect, Line, Locale};
use crate::shell::commands::{CommandResult, LineKind};
use crate::shell::parser::parse_command_line;
use crate::shell::{welcome_message, Dispatcher};
use std::sync::Arc;

fn dispatcher() -> Dispatcher {
    let clock = FixedClock::parse("2026-10-16T10:00:00+02:00").unwrap();
    Dispatcher::with_clock(Arc::new(clock))
}

fn run(cmd: &str, path: &str) -> CommandResult {
    dispatcher().process(cmd, path, Locale::En, false).0
}

fn texts(result: &CommandResult) -> Vec<String> {
    result.output.iter().map(|line| line.markup().into_owned()).collect()
}

#[test]
fn test_parser_basic() {
    let inv = parse_command_line("  cd   projects ").unwrap();
    assert_eq!(inv.program, "cd");
    assert_eq!(inv.args, vec!["projects".to_string()]);
    assert!(parse_command_line("   ").is_none());
}

#[test]
fn test_parser_quotes_and_fallback() {
    let inv = parse_command_line("cat \"about.txt\"").unwrap();
    assert_eq!(inv.args, vec!["about.txt".to_string()]);

    // Unbalanced quote falls back to whitespace splitting
    let inv = parse_command_line("blog it's").unwrap();
    assert_eq!(inv.args, vec!["it's".to_string()]);
}

#[test]
fn test_parser_keeps_hash_words() {
    let inv = parse_command_line("#foo").unwrap();
    assert_eq!(inv.program, "#foo");

    let inv = parse_command_line("cat #notes.txt").unwrap();
    assert_eq!(inv.args, vec!["#notes.txt".to_string()]);
}

#[test]
fn test_hash_input_reaches_handlers() {
    let result = run("#foo", "~");
    assert_eq!(result.kind, LineKind::Error);
    assert_eq!(
        texts(&result),
        vec!["Command not found: #foo. Type 'help' for available commands.".to_string()]
    );

    let result = run("cd #x", "~");
    assert_eq!(result.kind, LineKind::Error);
    assert_eq!(result.new_path, None);
    assert_eq!(texts(&result), vec!["cd: no such file or directory: #x".to_string()]);

    let result = run("blog #1", "~");
    assert_eq!(texts(&result), vec!["No blog post found for date: #1".to_string()]);

    let result = run("cat #notes.txt", "~");
    assert_eq!(texts(&result), vec!["cat: #notes.txt: No such file or directory".to_string()]);
}

#[test]
fn test_all_verbs_registered() {
    let d = dispatcher();
    for verb in [
        "help", "about", "skills", "projects", "experience", "education", "contact", "nico",
        "blog", "ls", "cd", "pwd", "whoami", "date", "clear", "cat", "tree", "lang", "language",
    ] {
        assert!(d.is_registered(verb), "{} should be registered", verb);
    }
    assert_eq!(d.verbs().len(), 19);
}

#[test]
fn test_welcome_message_variants() {
    for locale in Locale::ALL {
        let desktop = welcome_message(locale, false);
        let mobile = welcome_message(locale, true);
        assert_eq!(desktop, locale.commands().welcome.desktop);
        assert_eq!(mobile, locale.commands().welcome.mobile);
        assert_ne!(desktop, mobile);
        assert_eq!(welcome_message(locale, false), desktop);
    }
}

#[test]
fn test_help_desktop_and_mobile() {
    let d = dispatcher();
    let (desktop, _) = d.process("help", "~", Locale::En, false);
    assert_eq!(desktop.kind, LineKind::System);
    assert_eq!(desktop.output, Locale::En.commands().help.desktop);

    let (mobile, _) = d.process("help", "~", Locale::En, true);
    assert_eq!(mobile.kind, LineKind::System);
    assert_eq!(mobile.output, Locale::En.commands().help.mobile);
}

#[test]
fn test_verbs_are_case_insensitive() {
    let result = run("ABOUT", "~");
    assert_eq!(result.kind, LineKind::Output);
    assert_eq!(result.output, Locale::En.commands().about);
}

#[test]
fn test_sections() {
    let copy = Locale::En.commands();
    assert_eq!(run("skills", "~").output, copy.skills);
    assert_eq!(run("projects", "~").output, copy.projects);
    assert_eq!(run("experience", "~").output, copy.experience);
    assert_eq!(run("education", "~").output, copy.education);
    assert_eq!(run("contact", "~").output, copy.contact);
    assert_eq!(run("tree", "~/projects").output, copy.tree);
}

#[test]
fn test_projects_carry_links() {
    let result = run("projects", "~");
    assert!(texts(&result)
        .iter()
        .any(|line| line.contains("<link=https://github.com/Niccolo-Maffioli/movie-niccolo-app|Github>")));
}

#[test]
fn test_unknown_command() {
    let result = run("does-not-exist", "~");
    assert_eq!(result.kind, LineKind::Error);
    assert_eq!(
        texts(&result),
        vec![(Locale::En.commands().errors.command_not_found)("does-not-exist")]
    );

    let (result, locale) = dispatcher().process("zzz", "~", Locale::It, false);
    assert_eq!(locale, Locale::It);
    assert_eq!(texts(&result), vec![(Locale::It.commands().errors.command_not_found)("zzz")]);
}

#[test]
fn test_blank_input_is_a_no_op() {
    let (result, locale) = dispatcher().process("   ", "~/projects", Locale::It, false);
    assert!(result.output.is_empty());
    assert_eq!(result.kind, LineKind::Output);
    assert_eq!(result.new_path, None);
    assert_eq!(locale, Locale::It);
}

#[test]
fn test_pwd_is_idempotent() {
    let d = dispatcher();
    for _ in 0..3 {
        let (result, locale) = d.process("pwd", "~/projects", Locale::En, false);
        assert_eq!(texts(&result), vec!["~/projects".to_string()]);
        assert_eq!(result.kind, LineKind::Output);
        assert_eq!(result.new_path, None);
        assert_eq!(locale, Locale::En);
    }
}

#[test]
fn test_cd_navigation() {
    assert_eq!(run("cd", "~").new_path.as_deref(), Some("~"));
    assert_eq!(run("cd", "~/projects").new_path.as_deref(), Some("~"));
    assert_eq!(run("cd ..", "~/projects").new_path.as_deref(), Some("~"));
    assert_eq!(run("cd ..", "~").new_path.as_deref(), Some("~"));
    assert_eq!(run("cd projects", "~").new_path.as_deref(), Some("~/projects"));
    assert_eq!(run("cd projects/", "~").new_path.as_deref(), Some("~/projects"));
    assert_eq!(run("cd ~/experience", "~/projects").new_path.as_deref(), Some("~/experience"));

    let missing = run("cd nope", "~");
    assert_eq!(missing.kind, LineKind::Error);
    assert_eq!(missing.new_path, None);
    assert_eq!(texts(&missing), vec!["cd: no such file or directory: nope".to_string()]);

    // Files are not directories
    assert!(run("cd about.txt", "~").is_error());
}

#[test]
fn test_ls_lists_with_pinned_stamp() {
    let result = run("ls", "~");
    assert_eq!(result.kind, LineKind::Output);
    let lines = texts(&result);
    assert_eq!(lines.first().map(String::as_str), Some(""));
    assert_eq!(lines.last().map(String::as_str), Some(""));
    assert_eq!(lines[1], "-rw-r--r--  1 user user  1024 Oct 16 2026 about.txt");
    assert_eq!(lines[3], "drwxr-xr-x  2 user user  4096 Oct 16 2026 projects/");
    assert_eq!(lines.len(), 7);
}

#[test]
fn test_ls_with_argument() {
    let lines = texts(&run("ls experience", "~"));
    assert!(lines[1].ends_with(" fullstack-dev.txt"));

    let lines = texts(&run("ls /projects", "~"));
    assert!(lines[1].ends_with(" movie-app/"));
}

#[test]
fn test_ls_unknown_path() {
    let result = run("ls nope", "~");
    assert_eq!(result.kind, LineKind::Error);
    assert_eq!(texts(&result), vec!["ls: cannot access 'nope': No such file or directory".to_string()]);

    let result = run("ls", "~/ghost");
    assert_eq!(texts(&result), vec!["ls: cannot access '~/ghost': No such file or directory".to_string()]);
}

#[test]
fn test_cat() {
    let missing = run("cat", "~");
    assert_eq!(missing.kind, LineKind::Error);
    assert_eq!(texts(&missing), vec!["cat: missing file operand".to_string()]);

    let about = run("cat about.txt", "~");
    assert_eq!(about.kind, LineKind::Output);
    assert_eq!(about.output.len(), 5);
    assert!(about.output[0].is_blank());
    assert!(about.output[4].is_blank());
    assert_eq!(&about.output[1..4], Locale::En.commands().file("about.txt").unwrap());

    let unknown = run("cat secrets.txt", "~");
    assert_eq!(texts(&unknown), vec!["cat: secrets.txt: No such file or directory".to_string()]);
}

#[test]
fn test_blog() {
    let copy = Locale::En.commands();
    assert_eq!(run("blog", "~").output, copy.blog.list);

    let entry = run("blog 2025-06-09", "~");
    assert_eq!(entry.kind, LineKind::Output);
    assert_eq!(entry.output, copy.blog.entry("2025-06-09").unwrap());

    let missing = run("blog 1999-01-01", "~");
    assert_eq!(missing.kind, LineKind::Error);
    assert_eq!(texts(&missing), vec!["No blog post found for date: 1999-01-01".to_string()]);
}

#[test]
fn test_whoami_date_nico() {
    assert_eq!(texts(&run("whoami", "~")), vec!["Full Stack Developer".to_string()]);
    assert_eq!(texts(&run("date", "~")), vec!["Fri Oct 16 2026 10:00:00 GMT+0200".to_string()]);

    let nico = run("nico", "~");
    assert_eq!(nico.output, vec![Line::effect(Effect::Nico)]);
    assert_eq!(texts(&nico), vec!["::easteregg_nico::".to_string()]);
}

#[test]
fn test_clear_everywhere() {
    let d = dispatcher();
    for locale in Locale::ALL {
        for path in ["~", "~/projects", "~/nowhere"] {
            let (result, _) = d.process("clear", path, locale, false);
            assert!(result.output.is_empty());
            assert!(result.should_clear);
            assert_eq!(result.kind, LineKind::System);
        }
    }
}

#[test]
fn test_lang_switch_is_durable() {
    let d = dispatcher();
    let (result, locale) = d.process("lang it", "~", Locale::En, false);
    assert_eq!(result.kind, LineKind::System);
    assert_eq!(texts(&result), vec![Locale::It.commands().language.changed.to_string()]);
    assert_eq!(result.new_locale, Some(Locale::It));
    assert_eq!(locale, Locale::It);

    let (projects, locale) = d.process("projects", "~", locale, false);
    assert_eq!(projects.output, Locale::It.commands().projects);
    assert_eq!(locale, Locale::It);

    let (_, locale) = d.process("language en", "~", locale, false);
    assert_eq!(locale, Locale::En);
}

#[test]
fn test_lang_status_and_unsupported() {
    let d = dispatcher();
    let (status, locale) = d.process("lang", "~", Locale::It, false);
    assert_eq!(texts(&status), vec!["Lingua attuale: it. Usa: lang en | lang it".to_string()]);
    assert_eq!(locale, Locale::It);
    assert_eq!(status.new_locale, None);

    let (bad, locale) = d.process("lang fr", "~", Locale::En, false);
    assert_eq!(bad.kind, LineKind::Error);
    assert_eq!(texts(&bad), vec![Locale::En.commands().language.unsupported.to_string()]);
    assert_eq!(locale, Locale::En);
}

#[test]
fn test_result_json_shape() {
    let result = run("cd projects", "~");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["type"], "output");
    assert_eq!(json["newPath"], "~/projects");
    assert!(json.get("shouldClear").is_none());
    assert!(json.get("newLocale").is_none());

    let json = serde_json::to_value(run("clear", "~")).unwrap();
    assert_eq!(json["shouldClear"], true);
}
