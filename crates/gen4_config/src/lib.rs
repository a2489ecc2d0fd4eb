//! Parsing and validation of `gen4.toml` tool configuration files.
//!
//! The only configurable tool is the frequency calculator; its `[pll]` table
//! is read into a [`PllSection`] whose unset fields fall back to the board
//! defaults in `gen4_pll`.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::*;
