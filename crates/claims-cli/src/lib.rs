//! Library components for the `carebill` CLI.

pub mod book;
pub mod logging;
