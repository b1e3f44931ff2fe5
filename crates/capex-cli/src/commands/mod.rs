//! Subcommand implementations.

pub mod config;
pub mod event;
pub mod extract;
