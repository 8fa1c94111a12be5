//! # MIP Common Library
//!
//! Shared code for the Marketing Intelligence Platform modules:
//! - Common error types
//! - Configuration loading and data folder resolution

pub mod config;
pub mod error;

pub use error::{Error, Result};
