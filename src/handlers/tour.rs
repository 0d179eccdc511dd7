use anyhow::Result;
use colored::*;
use folio::config::FolioConfig;
use folio::content::Locale;
use folio::ui::onboarding::{FileFlagStore, FlagStore, ONBOARDING_KEY, Tour, TourCard};
use std::io::{self, BufRead, Write};

/// What a line typed while the tour card is up means.
#[derive(Debug, PartialEq, Eq)]
pub enum TourAction {
    Continue,
    Finish,
    /// Not a tour key; treat it as a normal command.
    Passthrough,
}

/// Enter advances (or closes on the last step), `:back`, `:skip` and
/// `:tour-lang <en|it>` drive the card.
pub fn handle_tour_key(tour: &mut Tour, line: &str) -> TourAction {
    let line = line.trim();
    if line.is_empty() {
        if tour.is_last_step() {
            return TourAction::Finish;
        }
        tour.next();
        return TourAction::Continue;
    }

    match line.split_once(' ').unwrap_or((line, "")) {
        (":back", _) => {
            tour.back();
            TourAction::Continue
        }
        (":skip", _) => TourAction::Finish,
        (":tour-lang", code) => {
            if let Some(locale) = Locale::parse(code) {
                tour.set_locale(locale);
            }
            TourAction::Continue
        }
        _ => TourAction::Passthrough,
    }
}

pub fn print_card(card: &TourCard) {
    println!();
    println!("{} {}", "──".dimmed(), card.indicator.yellow());
    println!("{}", card.title.bold());
    println!("{}", card.body);
    for tip in card.tips {
        println!("  {} {}", "•".cyan(), tip);
    }

    let controls: Vec<String> = card
        .controls
        .iter()
        .map(|(label, _)| format!("[{}]", label))
        .collect();
    println!("{}", controls.join(" "));

    let options: Vec<String> = card
        .language_options
        .iter()
        .map(|(locale, _)| locale.code().to_uppercase())
        .collect();
    println!("{} {}", "🌐".cyan(), options.join(" / ").dimmed());
    println!("{}", card.hint.dimmed());
}

pub fn handle_tour(config: &FolioConfig, reset: bool) -> Result<()> {
    let mut store = FileFlagStore::new(&config.onboarding.state_file);

    if reset {
        store.remove(ONBOARDING_KEY)?;
        println!("{} Tour reset.", "↺".cyan());
    }

    let mut tour = Tour::load(&store)?;
    if !tour.is_visible() {
        println!("{} Tour already seen. Use --reset to see it again.", "ℹ️".cyan());
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_card(&tour.card());
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        match handle_tour_key(&mut tour, &line?) {
            TourAction::Finish => break,
            TourAction::Continue => {}
            TourAction::Passthrough => {
                println!("{}", tour.card().hint.dimmed());
            }
        }
    }

    tour.dismiss(&mut store)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::ui::onboarding::MemoryFlagStore;

    #[test]
    fn test_tour_keys() {
        let mut tour = Tour::load(&MemoryFlagStore::default()).unwrap();
        assert_eq!(handle_tour_key(&mut tour, ""), TourAction::Continue);
        assert_eq!(tour.step(), 2);
        assert_eq!(handle_tour_key(&mut tour, ":back"), TourAction::Continue);
        assert_eq!(tour.step(), 1);
        assert_eq!(handle_tour_key(&mut tour, ":tour-lang it"), TourAction::Continue);
        assert_eq!(tour.locale(), Locale::It);
        assert_eq!(handle_tour_key(&mut tour, "help"), TourAction::Passthrough);
        handle_tour_key(&mut tour, "");
        assert_eq!(handle_tour_key(&mut tour, ""), TourAction::Finish);
        assert_eq!(handle_tour_key(&mut tour, ":skip"), TourAction::Finish);
    }
}
