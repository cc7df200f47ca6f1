//! moltbook - command-line client library for moltbook.com
//!
//! This library provides the building blocks of the moltbook CLI: credential
//! loading, the API client with its response classifier, and the dual-mode
//! output rendering.
//!
//! # Modules
//!
//! - [`api`]: HTTP client, transport seam and response classification
//! - [`cli`]: Command-line interface definitions and output rendering
//! - [`commands`]: Command handlers
//! - [`credentials`]: Credential file loading
//! - [`domain`]: Domain models and request/response shapes
//! - [`error`]: Error types

pub mod api;
pub mod cli;
pub mod commands;
pub mod credentials;
pub mod domain;
pub mod error;

#[cfg(test)]
pub mod mock;

pub use error::{AppError, Result};
