use anyhow::Result;
use colored::*;
use folio::config::FolioConfig;
use folio::content::{HeaderCopy, MetaCopy, TerminalUiCopy};

pub fn handle_info(config: &FolioConfig) -> Result<()> {
    let table = config.terminal.locale.table();

    println!();
    println!("{}", "📄 PAGE".green().bold());
    println!("{}", "=======".green());
    print_meta(&table.meta);
    println!();

    println!("{}", "🖥️  WINDOW".cyan().bold());
    println!("{}", "==========".cyan());
    print_window(&table.header, &table.terminal);
    println!();

    println!("{}", "⚙️  CONFIG".yellow().bold());
    println!("{}", "==========".yellow());
    println!("   Locale:      {}", config.terminal.locale);
    println!(
        "   Viewport:    {} px ({})",
        config.terminal.width,
        if config.is_narrow() { "narrow" } else { "wide" }
    );
    println!("   Log:         {:?} -> {}", config.log.strategy, config.log.dir.display());
    if config.sources.is_empty() {
        println!("   Sources:     {}", "(defaults)".dimmed());
    } else {
        println!("   Sources:     {}", config.sources.join(" > "));
    }
    println!();

    Ok(())
}

fn print_meta(meta: &MetaCopy) {
    println!("   Title:       {}", meta.title.bold());
    println!("   OG Title:    {}", meta.og_title);
    println!("   Description: {}", meta.description.italic());
}

fn print_window(header: &HeaderCopy, ui: &TerminalUiCopy) {
    println!("   Title:       {}", header.title.bold());
    println!("   Close:       {}", header.close_aria);
    println!("   Minimize:    {} / {}", header.minimize_aria.default, header.minimize_aria.active);
    println!("   Maximize:    {} / {}", header.compact_aria.default, header.compact_aria.active);
    println!("   Placeholder: {}", ui.placeholder.dimmed());
    println!("   Hidden:      {} [{}]", ui.hidden_message, ui.reopen_label);
    println!("   Minimized:   {} [{}]", ui.minimized_message, ui.restore_label);
}
