//! Turns scrollback rows into terminal text.

use crate::content::{Effect, ImageId, Line};
use crate::session::TerminalLine;
use crate::shell::commands::{CommandResult, LineKind};
use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::*;
use std::io::Write;
use std::thread;
use std::time::Duration;

const LED_FRAMES: [&str; 2] = ["● ○ ● ○ ●", "○ ● ○ ● ○"];

const NICO_MESSAGE: [&str; 4] = [
    "Accesso segreto riconosciuto...",
    "Ciao",
    "Hai sbloccato il terminale nascosto.",
    "Ecco un biscotto virtuale",
];

const NICO_CLOSING: &str = "(Terminale segreto chiuso automaticamente tra poco...)";

/// How `run` prints a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal text
    #[default]
    Text,
    /// The raw result object
    Json,
    /// One legacy markup string per line
    Markup,
}

pub struct Renderer {
    animate: bool,
    frame_delay: Duration,
}

impl Renderer {
    pub fn new(animate: bool) -> Self {
        Self {
            animate,
            frame_delay: Duration::from_millis(400),
        }
    }

    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    pub fn write_rows<W: Write>(&self, out: &mut W, rows: &[TerminalLine]) -> Result<()> {
        for row in rows {
            self.write_row(out, row)?;
        }
        Ok(())
    }

    pub fn write_row<W: Write>(&self, out: &mut W, row: &TerminalLine) -> Result<()> {
        match &row.line {
            Line::Effect { effect: Effect::Nico } => self.play_nico(out),
            _ => writeln!(out, "{}", paint(row)).context("Failed to write output"),
        }
    }

    pub fn write_result<W: Write>(
        &self,
        out: &mut W,
        result: &CommandResult,
        format: OutputFormat,
    ) -> Result<()> {
        match format {
            OutputFormat::Text => {
                for line in &result.output {
                    self.write_row(out, &TerminalLine::new(result.kind, line.clone()))?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, result)
                    .context("Failed to serialize result")?;
                writeln!(out)?;
            }
            OutputFormat::Markup => {
                for line in &result.output {
                    writeln!(out, "{}", line.markup())?;
                }
            }
        }
        Ok(())
    }

    fn play_nico<W: Write>(&self, out: &mut W) -> Result<()> {
        if !self.animate {
            writeln!(out, "{}", LED_FRAMES[0].yellow())?;
            for line in NICO_MESSAGE {
                writeln!(out, "{}", line.green())?;
            }
            writeln!(out, "{}", NICO_CLOSING.magenta())?;
            return Ok(());
        }

        for line in NICO_MESSAGE {
            for frame in LED_FRAMES.iter().cycle().take(4) {
                write!(out, "\r{}", frame.yellow())?;
                out.flush()?;
                thread::sleep(self.frame_delay);
            }
            writeln!(out, "\r{:<width$}", line.green(), width = LED_FRAMES[0].chars().count())?;
        }
        writeln!(out, "{}", NICO_CLOSING.magenta())?;
        Ok(())
    }
}

/// One row with colors. Images span several lines.
pub fn paint(row: &TerminalLine) -> String {
    match &row.line {
        Line::Text { text } => paint_text(text, row.kind),
        Line::Link { prefix, url, label: Some(label) } => format!(
            "{}{} {}",
            paint_text(prefix, row.kind),
            label.blue().underline(),
            format!("({})", url).dimmed()
        ),
        Line::Link { prefix, url, label: None } => {
            format!("{}{}", paint_text(prefix, row.kind), url.blue().underline())
        }
        Line::Image { image } => image_frame(*image),
        Line::Effect { effect } => effect.sentinel().to_string(),
    }
}

fn paint_text(text: &str, kind: LineKind) -> String {
    if kind == LineKind::Output {
        if let Some(listing) = paint_listing(text) {
            return listing;
        }
    }
    match kind {
        LineKind::Command => text.to_string(),
        LineKind::Output => text.cyan().to_string(),
        LineKind::Error => text.red().to_string(),
        LineKind::System => text.green().to_string(),
    }
}

/// `ls` rows: permissions yellow, name cyan.
fn paint_listing(text: &str) -> Option<String> {
    if !(text.starts_with("drwx") || text.starts_with("-rw-")) {
        return None;
    }
    let (perms, rest) = text.split_once(' ')?;
    let (middle, name) = rest.rsplit_once(' ')?;
    Some(format!("{} {} {}", perms.yellow(), middle, name.cyan()))
}

fn image_frame(image: ImageId) -> String {
    let label = format!("[ {} ]", image.as_str());
    let width = label.chars().count() + 4;
    let bar = "─".repeat(width);
    format!("┌{}┐\n│  {}  │\n└{}┘", bar, label.dimmed(), bar)
}
