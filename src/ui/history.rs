#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Submitted commands plus a recall cursor (`None` = editing a new line).
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl History {
    pub fn push(&mut self, command: &str) {
        self.entries.push(command.to_string());
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Moves the cursor and returns the text the input should show.
    ///
    /// `Up` from a fresh line jumps to the newest entry, then walks back
    /// and stops at the oldest. `Down` walks forward and stops at the
    /// newest; it does nothing on a fresh line.
    pub fn navigate(&mut self, direction: Direction) -> String {
        if self.entries.is_empty() {
            return String::new();
        }

        let last = self.entries.len() - 1;
        self.cursor = match (direction, self.cursor) {
            (Direction::Up, None) => Some(last),
            (Direction::Up, Some(i)) => Some(i.saturating_sub(1)),
            (Direction::Down, None) => None,
            (Direction::Down, Some(i)) => Some((i + 1).min(last)),
        };

        self.cursor
            .map(|i| self.entries[i].clone())
            .unwrap_or_default()
    }
}
