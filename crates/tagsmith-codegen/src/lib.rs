//! # tagsmith-codegen
//!
//! The extension code generator: turns declarative per-type configuration
//! into exact source text for the legacy runtime contract.
//!
//! Everything here is synchronous, pure, and byte-stable: the same definition
//! always compiles to identical text, because the diff engine compares
//! generated code verbatim against the deployed remote copy.
//!
//! Failure policy is two-class:
//! - `Ok(None)` — a recognized-but-unsupported configuration shape; the
//!   caller silently skips that one definition.
//! - `Err(_)` — an invariant violation (unsupported operator or scope,
//!   load-rule restriction); the whole batch aborts.

pub mod conditions;
pub mod error;
pub mod escape;
pub mod generators;

pub use error::{CodegenError, Result};
pub use generators::generate;
