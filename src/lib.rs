//! A personal portfolio you browse like a Unix terminal.
//!
//! [`shell::Dispatcher`] maps one line of input to localized output over a
//! small read-only directory tree; [`session::Session`] keeps the screen
//! state around it.

pub mod clock;
pub mod config;
pub mod content;
pub mod logger;
pub mod render;
pub mod session;
pub mod shell;
pub mod ui;
pub mod vfs;
