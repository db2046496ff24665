//! # tagsmith-core
//!
//! Core library for the Tagsmith CLI providing:
//! - Configuration file parsing (tagsmith.yaml)
//! - Type definitions for extension definitions, conditions, and remote payloads
//! - The `Extension` value object compared by the diff engine

pub mod config;
pub mod error;
pub mod types;

pub use config::TagsmithConfig;
pub use error::{Error, Result};
