pub mod cat;
pub mod cd;
pub mod ls;
pub mod pwd;
