//! Terminal setup and shared styling.

pub mod terminal;
pub mod theme;
