pub mod agenda;
pub mod content;
pub mod qa;
pub mod title;
