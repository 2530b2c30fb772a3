//! # Hello Agent Core
//!
//! Core types and traits for the hello-agent demo.
//!
//! This crate provides the provider identifiers, the normalized greeting
//! output, the error taxonomy, and the configuration layer shared by the
//! provider adapters and the CLI.

pub mod config;
pub mod errors;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;

#[cfg(test)]
mod config_tests;
