use anyhow::Result;
use folio::config::FolioConfig;
use folio::render::{OutputFormat, Renderer};
use folio::shell::Dispatcher;
use log::info;
use std::io;

pub fn handle_run(config: &FolioConfig, path: &str, format: OutputFormat, command: &[String]) -> Result<()> {
    let line = command.join(" ");
    let dispatcher = Dispatcher::new();
    let (result, locale) = dispatcher.process(&line, path, config.terminal.locale, config.is_narrow());

    if locale != config.terminal.locale {
        info!("Language switched to {} (not persisted)", locale);
    }

    let renderer = Renderer::new(config.terminal.animate);
    renderer.write_result(&mut io::stdout().lock(), &result, format)
}
