//! # Autocommit Core
//!
//! Core settings and configuration for autocommit - strictly functional Rust
//! with zero unwraps.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Result` instead
//! - No `expect()` - returns `Result` instead
//! - No `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, Error>`. Use:
//! - `?` operator for propagation
//! - `map`, `and_then` combinators for transformation
//! - `match` / `map_or` / `unwrap_or_else` for defaults

pub mod config;
mod error;
mod output_format;

pub use config::{
    CommitSettings, CommitSettingsPatch, Config, ConfigPatch, MessageConfig, MessagePatch,
};
pub use error::{Error, Result};
pub use output_format::OutputFormat;
