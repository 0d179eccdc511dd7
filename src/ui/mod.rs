//! State of the terminal window around the dispatcher: view toggles,
//! history recall, completion, quick menu and the onboarding tour.

pub mod completion;
pub mod history;
pub mod menu;
pub mod onboarding;
pub mod view;
