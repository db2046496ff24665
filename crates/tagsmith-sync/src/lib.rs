//! # tagsmith-sync
//!
//! Keeps a remote tag-management deployment in sync with local source:
//! - Structural diff of local vs. remote extension collections
//! - The `Platform` trait and its HTTP implementation
//! - The `SyncEngine` orchestrating fetch, generate, diff, and push
//!
//! The diff itself is pure and synchronous; only the platform calls are
//! async, and the engine invokes them strictly sequentially.

pub mod diff;
pub mod engine;
pub mod platform;

pub use diff::{diff, DiffResult};
pub use engine::{compile_definitions, CompiledBatch, SyncEngine, SyncOptions, SyncSummary};
pub use platform::{HttpPlatform, Platform};
