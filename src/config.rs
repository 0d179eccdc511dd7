use anyhow::{Context, Result, bail};
use crate::content::Locale;
use log::{debug, info};
use serde::Deserialize;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILE: &str = "folio.toml";

/// Viewports this wide or narrower get the compact content.
pub const NARROW_BREAKPOINT: u32 = 768;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LogStrategy {
    Always,
    ErrorOnly,
    #[default]
    None,
}

impl FromStr for LogStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(LogStrategy::Always),
            "error-only" | "error_only" => Ok(LogStrategy::ErrorOnly),
            "none" => Ok(LogStrategy::None),
            other => bail!("Unknown log strategy '{}' (expected always, error-only or none)", other),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TerminalConfig {
    pub locale: Locale,
    pub width: u32,
    pub animate: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            width: 1024,
            animate: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub strategy: LogStrategy,
    pub plain: bool,
    pub dir: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            strategy: LogStrategy::None,
            plain: true,
            dir: Path::new(".folio").join("logs"),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OnboardingConfig {
    pub state_file: PathBuf,
    pub enabled: bool,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            state_file: Path::new(".folio").join("state"),
            enabled: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct FolioConfig {
    pub terminal: TerminalConfig,
    pub log: LogConfig,
    pub onboarding: OnboardingConfig,
    /// Layers that contributed, in the order they were applied.
    #[serde(skip)]
    pub sources: Vec<String>,
}

impl FolioConfig {
    pub fn is_narrow(&self) -> bool {
        self.terminal.width <= NARROW_BREAKPOINT
    }

    /// Applies `FOLIO_*` variables from one layer. Unrelated keys are
    /// ignored.
    pub fn apply_env<I>(&mut self, vars: I, source: &str) -> Result<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut touched = false;
        for (key, val) in vars {
            match key.as_str() {
                "FOLIO_LANG" => {
                    self.terminal.locale = val
                        .parse()
                        .with_context(|| format!("Invalid FOLIO_LANG in {}", source))?;
                }
                "FOLIO_WIDTH" => {
                    self.terminal.width = val
                        .trim()
                        .parse()
                        .with_context(|| format!("Invalid FOLIO_WIDTH in {}", source))?;
                }
                "FOLIO_LOG_STRATEGY" => {
                    self.log.strategy = val
                        .parse()
                        .with_context(|| format!("Invalid FOLIO_LOG_STRATEGY in {}", source))?;
                }
                _ => continue,
            }
            touched = true;
        }
        if touched {
            self.sources.push(source.to_string());
        }
        Ok(())
    }

    /// Command line flags win over every file and variable.
    pub fn apply_cli(&mut self, lang: Option<Locale>, narrow: bool) {
        if let Some(locale) = lang {
            self.terminal.locale = locale;
        }
        if narrow {
            self.terminal.width = self.terminal.width.min(NARROW_BREAKPOINT);
        }
        if lang.is_some() || narrow {
            self.sources.push("cli".to_string());
        }
    }
}

/// Loads `folio.toml` (or `explicit`) from `dir`, then the `.env` layer,
/// then the process environment.
pub fn load_config(dir: &Path, explicit: Option<&Path>) -> Result<FolioConfig> {
    load_layers(dir, explicit, env::var("FOLIO_ENV").ok(), utf8_vars(env::vars_os()))
}

/// Drops variables whose name or value is not valid UTF-8.
fn utf8_vars<I>(vars: I) -> impl Iterator<Item = (String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter().filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
        (Ok(key), Ok(value)) => Some((key, value)),
        (key, _) => {
            debug!("Skipping non UTF-8 environment variable {:?}", key);
            None
        }
    })
}

pub fn load_layers<I>(
    dir: &Path,
    explicit: Option<&Path>,
    profile: Option<String>,
    process_env: I,
) -> Result<FolioConfig>
where
    I: IntoIterator<Item = (String, String)>,
{
    // 1. folio.toml (Base Layer)
    let config_path = match explicit {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => dir.join(path),
        None => dir.join(CONFIG_FILE),
    };

    let mut config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let mut config: FolioConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        config.sources.push(config_path.display().to_string());
        config
    } else if explicit.is_some() {
        bail!("Config file not found: {}", config_path.display());
    } else {
        FolioConfig::default()
    };

    // 2. .env or .env.<FOLIO_ENV> (Override Layer)
    let env_filename = profile
        .map(|p| format!(".env.{}", p))
        .unwrap_or_else(|| ".env".to_string());
    let env_path = dir.join(&env_filename);

    if env_path.exists() {
        info!("Loading environment from: {}", env_filename);
        let mut vars = Vec::new();
        for item in dotenvy::from_path_iter(&env_path)? {
            vars.push(item?);
        }
        config.apply_env(vars, &env_filename)?;
    }

    // 3. Process environment
    config.apply_env(process_env, "env")?;

    Ok(config)
}
