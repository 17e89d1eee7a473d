//! Subcommand implementations.
//!
//! Each command writes its result to stdout; diagnostics go through
//! `tracing` to stderr.

pub mod browse;
pub mod details;
pub mod favorites;
pub mod layout;
