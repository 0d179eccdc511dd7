pub mod clear;
pub mod date;
pub mod lang;
pub mod whoami;
