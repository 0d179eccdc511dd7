use crate::content::Locale;

/// One entry of the quick menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub label: String,
    pub command: String,
}

fn link(id: &'static str, label: &str, command: &str) -> NavLink {
    NavLink {
        id,
        label: label.to_string(),
        command: command.to_string(),
    }
}

/// Sections reachable without typing, plus a toggle to the other language.
pub fn nav_links(current: Locale) -> Vec<NavLink> {
    let target = current.other();
    vec![
        link("About-me", "About", "about"),
        link("Skills", "Skills", "skills"),
        link("Projects", "Projects", "projects"),
        link("Experience", "Experience", "experience"),
        link("Contact", "Contact", "contact"),
        link("Help", "Help", "help"),
        link("Clear", "Clear", "clear"),
        NavLink {
            id: "Language",
            label: format!("Lang ({})", target.code().to_uppercase()),
            command: format!("lang {}", target),
        },
    ]
}

/// Open/closed state of the menu.
#[derive(Debug, Default, Clone)]
pub struct QuickMenu {
    open: bool,
}

impl QuickMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Picks entry `index` (0-based) and closes the menu. Returns the
    /// command to run.
    pub fn select(&mut self, current: Locale, index: usize) -> Option<String> {
        let command = nav_links(current).into_iter().nth(index).map(|l| l.command);
        self.close();
        command
    }
}
