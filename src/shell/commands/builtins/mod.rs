pub mod env;
pub mod fs;
pub mod portfolio;

use crate::content::Section;
use crate::shell::Dispatcher;
use portfolio::section::SectionCommand;

/// Helper to register all built-in commands at once
pub fn register_all_builtins(dispatcher: &mut Dispatcher) {
    // Portfolio sections
    dispatcher.register_command("about", Box::new(SectionCommand(Section::About)));
    dispatcher.register_command("skills", Box::new(SectionCommand(Section::Skills)));
    dispatcher.register_command("projects", Box::new(SectionCommand(Section::Projects)));
    dispatcher.register_command("experience", Box::new(SectionCommand(Section::Experience)));
    dispatcher.register_command("education", Box::new(SectionCommand(Section::Education)));
    dispatcher.register_command("contact", Box::new(SectionCommand(Section::Contact)));
    dispatcher.register_command("tree", Box::new(SectionCommand(Section::Tree)));
    dispatcher.register_command("help", Box::new(portfolio::help::HelpCommand));
    dispatcher.register_command("blog", Box::new(portfolio::blog::BlogCommand));
    dispatcher.register_command("nico", Box::new(portfolio::nico::NicoCommand));

    // FS/Navigation
    dispatcher.register_command("ls", Box::new(fs::ls::LsCommand));
    dispatcher.register_command("cd", Box::new(fs::cd::CdCommand));
    dispatcher.register_command("cat", Box::new(fs::cat::CatCommand));
    dispatcher.register_command("pwd", Box::new(fs::pwd::PwdCommand));

    // Env
    dispatcher.register_command("whoami", Box::new(env::whoami::WhoamiCommand));
    dispatcher.register_command("date", Box::new(env::date::DateCommand));
    dispatcher.register_command("clear", Box::new(env::clear::ClearCommand));
    dispatcher.register_command("lang", Box::new(env::lang::LangCommand));
    dispatcher.register_command("language", Box::new(env::lang::LangCommand));
}
