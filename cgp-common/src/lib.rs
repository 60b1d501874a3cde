//! # CGP Common Library
//!
//! Shared code for CGP services:
//! - Error types
//! - Bootstrap configuration loading (CLI > ENV > TOML > compiled defaults)
//! - Tracing initialization

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
