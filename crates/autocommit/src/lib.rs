//! Autocommit CLI library
//!
//! Command definitions and handlers for the `autocommit` binary.

pub mod cli;
pub mod commands;
