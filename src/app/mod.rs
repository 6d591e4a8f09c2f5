//! App module - command-line shell around the report pipeline
//!
//! This module contains everything that touches the outside world:
//! - Command-line arguments
//! - Configuration loading
//! - Logging setup
//! - Snapshot discovery and decoding

pub mod cli;
pub mod config;
pub mod loader;
pub mod logging;
