//! Command handlers and terminal output for the `delpresence` binary.

pub mod commands;
pub mod output;
