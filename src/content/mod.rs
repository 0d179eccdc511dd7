//! Localized copy for every user-visible string.
//!
//! Each locale owns one static [`ContentTable`]; switching language swaps
//! the whole table. Templates that embed a user token are plain functions.

pub mod line;
mod en;
mod it;

pub use line::{Effect, ImageId, Line};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    It,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::It];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::It => "it",
        }
    }

    /// Case-insensitive, ignores surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "it" => Some(Locale::It),
            _ => None,
        }
    }

    /// The locale the quick menu offers to switch to.
    pub fn other(self) -> Self {
        match self {
            Locale::En => Locale::It,
            Locale::It => Locale::En,
        }
    }

    pub fn table(self) -> &'static ContentTable {
        match self {
            Locale::En => &en::EN,
            Locale::It => &it::IT,
        }
    }

    pub fn commands(self) -> &'static CommandCopy {
        &self.table().commands
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported language '{}' (expected en or it)", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

/// A block with a desktop and a narrow-viewport rendition.
#[derive(Debug)]
pub struct Variants {
    pub desktop: &'static [Line],
    pub mobile: &'static [Line],
}

impl Variants {
    pub fn pick(&self, narrow: bool) -> &'static [Line] {
        if narrow { self.mobile } else { self.desktop }
    }
}

#[derive(Debug)]
pub struct MetaCopy {
    pub title: &'static str,
    pub description: &'static str,
    pub og_title: &'static str,
}

#[derive(Debug)]
pub struct TerminalUiCopy {
    pub hidden_message: &'static str,
    pub reopen_label: &'static str,
    pub minimized_message: &'static str,
    pub restore_label: &'static str,
    pub placeholder: &'static str,
    pub suggestions_label: &'static str,
}

#[derive(Debug)]
pub struct ToggleAria {
    pub default: &'static str,
    pub active: &'static str,
}

impl ToggleAria {
    pub fn pick(&self, active: bool) -> &'static str {
        if active { self.active } else { self.default }
    }
}

#[derive(Debug)]
pub struct HeaderCopy {
    pub title: &'static str,
    pub close_aria: &'static str,
    pub minimize_aria: ToggleAria,
    pub compact_aria: ToggleAria,
}

#[derive(Debug)]
pub struct StepCopy {
    pub title: &'static str,
    pub body: &'static str,
    pub tips: &'static [&'static str],
}

/// `(current, total)` step templates.
pub type StepTemplate = fn(usize, usize) -> String;

#[derive(Debug)]
pub struct ControlsAria {
    pub skip: StepTemplate,
    pub next: StepTemplate,
    pub back: StepTemplate,
    pub done: StepTemplate,
}

#[derive(Debug)]
pub struct OnboardingCopy {
    pub step_indicator: StepTemplate,
    pub language_label: &'static str,
    pub skip_label: &'static str,
    pub next_label: &'static str,
    pub back_label: &'static str,
    pub done_label: &'static str,
    pub continue_hint: &'static str,
    pub close_hint: &'static str,
    pub language_option_aria: fn(Locale, bool) -> String,
    pub controls_aria: ControlsAria,
    pub steps: [StepCopy; 2],
}

#[derive(Debug)]
pub struct LanguageCopy {
    pub changed: &'static str,
    pub current: fn(Locale) -> String,
    pub unsupported: &'static str,
}

#[derive(Debug)]
pub struct BlogCopy {
    pub list: &'static [Line],
    pub entries: &'static [(&'static str, &'static [Line])],
    pub not_found: fn(&str) -> String,
}

impl BlogCopy {
    pub fn entry(&self, date: &str) -> Option<&'static [Line]> {
        self.entries
            .iter()
            .find(|(key, _)| *key == date)
            .map(|(_, lines)| *lines)
    }
}

#[derive(Debug)]
pub struct ErrorCopy {
    pub command_not_found: fn(&str) -> String,
    pub ls_not_found: fn(&str) -> String,
    pub cd_not_found: fn(&str) -> String,
    pub cat_missing_operand: &'static str,
    pub cat_not_found: fn(&str) -> String,
}

/// Portfolio sections that print a fixed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Skills,
    Projects,
    Experience,
    Education,
    Contact,
    Tree,
}

#[derive(Debug)]
pub struct CommandCopy {
    pub welcome: Variants,
    pub language: LanguageCopy,
    pub help: Variants,
    pub about: &'static [Line],
    pub skills: &'static [Line],
    pub projects: &'static [Line],
    pub experience: &'static [Line],
    pub education: &'static [Line],
    pub contact: &'static [Line],
    pub whoami: &'static str,
    pub tree: &'static [Line],
    pub blog: BlogCopy,
    pub files: &'static [(&'static str, &'static [Line])],
    pub errors: ErrorCopy,
}

impl CommandCopy {
    pub fn section(&self, section: Section) -> &'static [Line] {
        match section {
            Section::About => self.about,
            Section::Skills => self.skills,
            Section::Projects => self.projects,
            Section::Experience => self.experience,
            Section::Education => self.education,
            Section::Contact => self.contact,
            Section::Tree => self.tree,
        }
    }

    pub fn file(&self, name: &str) -> Option<&'static [Line]> {
        self.files
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, lines)| *lines)
    }
}

#[derive(Debug)]
pub struct ContentTable {
    pub meta: MetaCopy,
    pub terminal: TerminalUiCopy,
    pub header: HeaderCopy,
    pub onboarding: OnboardingCopy,
    pub commands: CommandCopy,
}
