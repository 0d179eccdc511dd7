//! First-run guided tour.
//!
//! The tour is shown until the visitor skips or finishes it once; that
//! fact is remembered in a tiny key-value store under
//! [`ONBOARDING_KEY`].

use crate::content::{Locale, OnboardingCopy};
use anyhow::{Context, Result};
use log::{info, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const ONBOARDING_KEY: &str = "terminal-onboarding";
pub const SEEN: &str = "seen";
pub const TOTAL_STEPS: usize = 2;

/// Persistent string flags.
pub trait FlagStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Flags kept in a `key=value` text file.
pub struct FileFlagStore {
    path: PathBuf,
}

impl FileFlagStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read state file {}", self.path.display()))?;

        let mut flags = BTreeMap::new();
        for line in content.lines() {
            match line.split_once('=') {
                Some((key, value)) => {
                    flags.insert(key.trim().to_string(), value.trim().to_string());
                }
                None if line.trim().is_empty() => {}
                None => warn!("Ignoring malformed state line: {:?}", line),
            }
        }
        Ok(flags)
    }

    fn save(&self, flags: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("Failed to create state directory")?;
            }
        }
        let body: String = flags
            .iter()
            .map(|(k, v)| format!("{}={}\n", k, v))
            .collect();
        fs::write(&self.path, body)
            .with_context(|| format!("Failed to write state file {}", self.path.display()))
    }
}

impl FlagStore for FileFlagStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut flags = self.load()?;
        flags.insert(key.to_string(), value.to_string());
        self.save(&flags)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut flags = self.load()?;
        if flags.remove(key).is_some() {
            self.save(&flags)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    flags: BTreeMap<String, String>,
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.flags.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.flags.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.flags.remove(key);
        Ok(())
    }
}

/// Everything needed to draw the card for the current step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourCard {
    pub indicator: String,
    pub title: &'static str,
    pub body: &'static str,
    pub tips: &'static [&'static str],
    pub hint: &'static str,
    /// `(label, accessible label)` for each control, in display order.
    pub controls: Vec<(&'static str, String)>,
    pub language_options: Vec<(Locale, String)>,
}

#[derive(Debug, Clone)]
pub struct Tour {
    visible: bool,
    step: usize,
    locale: Locale,
}

impl Tour {
    /// Visible unless the store says it was already seen.
    pub fn load(store: &dyn FlagStore) -> Result<Self> {
        let seen = store.get(ONBOARDING_KEY)?.is_some();
        Ok(Self {
            visible: !seen,
            step: 1,
            locale: Locale::En,
        })
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn is_last_step(&self) -> bool {
        self.step == TOTAL_STEPS
    }

    pub fn next(&mut self) {
        self.step = (self.step + 1).min(TOTAL_STEPS);
    }

    pub fn back(&mut self) {
        self.step = self.step.saturating_sub(1).max(1);
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Hides the tour, resets it and remembers that it was seen.
    pub fn dismiss(&mut self, store: &mut dyn FlagStore) -> Result<()> {
        self.visible = false;
        self.step = 1;
        self.locale = Locale::En;
        store.set(ONBOARDING_KEY, SEEN)?;
        info!("Onboarding marked as {}", SEEN);
        Ok(())
    }

    fn copy(&self) -> &'static OnboardingCopy {
        &self.locale.table().onboarding
    }

    pub fn card(&self) -> TourCard {
        let copy = self.copy();
        let step = &copy.steps[self.step - 1];
        let aria = &copy.controls_aria;
        let (current, total) = (self.step, TOTAL_STEPS);

        let mut controls = vec![(copy.skip_label, (aria.skip)(current, total))];
        if current > 1 {
            controls.push((copy.back_label, (aria.back)(current, total)));
        }
        if self.is_last_step() {
            controls.push((copy.done_label, (aria.done)(current, total)));
        } else {
            controls.push((copy.next_label, (aria.next)(current, total)));
        }

        TourCard {
            indicator: (copy.step_indicator)(current, total),
            title: step.title,
            body: step.body,
            tips: step.tips,
            hint: if self.is_last_step() { copy.close_hint } else { copy.continue_hint },
            controls,
            language_options: Locale::ALL
                .iter()
                .map(|&option| (option, (copy.language_option_aria)(option, option == self.locale)))
                .collect(),
        }
    }
}
