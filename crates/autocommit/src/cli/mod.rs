//! CLI argument parsing and dispatch

pub mod args;
pub mod dispatch;

pub use args::build_cli;
pub use dispatch::dispatch;
