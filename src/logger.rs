use anyhow::{Context, Result};
use blake3::Hasher;
use chrono::{DateTime, FixedOffset};
use crate::config::{LogConfig, LogStrategy};
use crate::content::Locale;
use crate::session::{SessionStats, TerminalLine};
use crate::shell::commands::LineKind;
use log::info;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ANSI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;]*m").expect("ANSI pattern is valid")
});

pub fn strip_ansi(content: &str) -> String {
    ANSI.replace_all(content, "").to_string()
}

/// What a finished session hands over to the transcript writer.
pub struct Transcript<'a> {
    pub locale: Locale,
    pub narrow: bool,
    pub started_at: DateTime<FixedOffset>,
    pub ended_at: DateTime<FixedOffset>,
    pub rows: &'a [TerminalLine],
    pub stats: SessionStats,
}

/// Six hex chars identifying a session in its file name.
pub fn short_hash(locale: Locale, started_at: &DateTime<FixedOffset>) -> String {
    let mut hasher = Hasher::new();
    hasher.update(locale.code().as_bytes());
    hasher.update(started_at.to_rfc3339().as_bytes());
    let hash_full = hasher.finalize().to_hex().to_string();
    hash_full[0..6].to_string()
}

fn row_prefix(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Command => "",
        LineKind::Output => "  ",
        LineKind::Error => "! ",
        LineKind::System => "# ",
    }
}

pub fn write_transcript(
    transcript: &Transcript<'_>,
    config: &LogConfig,
    root: &Path,
) -> Result<Option<PathBuf>> {
    // 1. Determine Strategy
    match config.strategy {
        LogStrategy::None => return Ok(None),
        LogStrategy::ErrorOnly => {
            if transcript.stats.errors == 0 {
                return Ok(None);
            }
        }
        LogStrategy::Always => {}
    }

    // 2. Generate Path
    let started = transcript.started_at;
    let date_str = started.format("%Y-%m-%d").to_string();
    let time_str = started.format("%H%M%S").to_string();
    let hash = short_hash(transcript.locale, &started);

    let filename = format!("{}_{}_{}.log", time_str, transcript.locale, hash);
    let log_dir = root.join(&config.dir).join(date_str);

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;
    let log_path = log_dir.join(filename);

    // 3. Format Content
    let mut file_content = String::new();

    file_content.push_str("=== FOLIO SESSION TRANSCRIPT ===\n");
    file_content.push_str(&format!("Start: {}\n", started.to_rfc3339()));
    file_content.push_str(&format!("Locale: {}\n", transcript.locale));
    file_content.push_str(&format!("Narrow: {}\n", transcript.narrow));
    file_content.push_str("================================\n\n");

    for row in transcript.rows {
        let line = format!("{}{}", row_prefix(row.kind), row.line);
        if config.plain {
            file_content.push_str(&strip_ansi(&line));
        } else {
            file_content.push_str(&line);
        }
        file_content.push('\n');
    }

    let duration = transcript.ended_at - started;
    file_content.push_str("\n================================\n");
    file_content.push_str(&format!("Commands: {}\n", transcript.stats.commands));
    file_content.push_str(&format!("Errors: {}\n", transcript.stats.errors));
    file_content.push_str(&format!("Duration: {} ms\n", duration.num_milliseconds().max(0)));
    file_content.push_str(&format!("End Time: {}\n", transcript.ended_at.to_rfc3339()));
    file_content.push_str("================================\n");

    fs::write(&log_path, file_content).context("Failed to write transcript")?;
    info!("Transcript written to {}", log_path.display());

    Ok(Some(log_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Line;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn rows() -> Vec<TerminalLine> {
        vec![
            TerminalLine::new(LineKind::Command, Line::owned("~ $ foo")),
            TerminalLine::new(LineKind::Error, Line::owned("\x1b[31mcommand not found: foo\x1b[0m")),
        ]
    }

    fn transcript(rows: &[TerminalLine], errors: usize) -> Transcript<'_> {
        Transcript {
            locale: Locale::It,
            narrow: false,
            started_at: at("2026-10-16T10:00:00+02:00"),
            ended_at: at("2026-10-16T10:00:02.500+02:00"),
            rows,
            stats: SessionStats { commands: 1, errors },
        }
    }

    fn config(strategy: LogStrategy) -> LogConfig {
        LogConfig {
            strategy,
            ..LogConfig::default()
        }
    }

    #[test]
    fn test_strip_ansi() {
        assert_eq!(strip_ansi("\x1b[1;32mok\x1b[0m"), "ok");
    }

    #[test]
    fn test_strategy_none_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let rows = rows();
        let written = write_transcript(&transcript(&rows, 1), &config(LogStrategy::None), dir.path());
        assert!(written.unwrap().is_none());
    }

    #[test]
    fn test_error_only_skips_clean_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let rows = rows();
        let cfg = config(LogStrategy::ErrorOnly);
        assert!(write_transcript(&transcript(&rows, 0), &cfg, dir.path()).unwrap().is_none());
        assert!(write_transcript(&transcript(&rows, 1), &cfg, dir.path()).unwrap().is_some());
    }

    #[test]
    fn test_transcript_layout() {
        let dir = tempfile::tempdir().unwrap();
        let rows = rows();
        let t = transcript(&rows, 1);
        let path = write_transcript(&t, &config(LogStrategy::Always), dir.path())
            .unwrap()
            .unwrap();

        let hash = short_hash(Locale::It, &t.started_at);
        let expected = dir
            .path()
            .join(".folio/logs/2026-10-16")
            .join(format!("100000_it_{}.log", hash));
        assert_eq!(path, expected);

        let body = fs::read_to_string(path).unwrap();
        assert!(body.contains("Locale: it\n"));
        assert!(body.contains("~ $ foo\n! command not found: foo\n"));
        assert!(body.contains("Commands: 1\nErrors: 1\nDuration: 2500 ms\n"));
        assert!(!body.contains('\x1b'));
    }
}
