// src/errors.rs

//! Crate-wide error aliases.
//!
//! A thin wrapper around `anyhow`; process failures themselves are never
//! errors (they fold into `ExecutionResult::success`), so this only covers
//! config loading and startup problems.

pub use anyhow::{Error, Result};
