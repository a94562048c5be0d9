//! Command implementations for the CLI
//!
//! This module contains the implementation of all CLI commands:
//! - estimate: Compute and print a contract estimate
//! - pricing: Display the effective pricing table
//! - serve: Run the HTTP API
//! - config: Configuration display and validation

pub mod config;
pub mod estimate;
pub mod pricing;
pub mod serve;
