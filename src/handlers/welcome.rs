use anyhow::Result;
use folio::config::FolioConfig;
use folio::render::Renderer;
use folio::session::TerminalLine;
use folio::shell::commands::LineKind;
use folio::shell::welcome_message;
use std::io;

pub fn handle_welcome(config: &FolioConfig) -> Result<()> {
    let rows: Vec<TerminalLine> = welcome_message(config.terminal.locale, config.is_narrow())
        .iter()
        .cloned()
        .map(|line| TerminalLine::new(LineKind::System, line))
        .collect();

    Renderer::new(config.terminal.animate).write_rows(&mut io::stdout().lock(), &rows)
}
