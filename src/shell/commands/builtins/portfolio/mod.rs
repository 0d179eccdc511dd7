pub mod blog;
pub mod help;
pub mod nico;
pub mod section;
