//! Core contracts for Shelfseed.
//!
//! This crate defines the error taxonomy, the connection configuration, and
//! the table registry shared by the loader, generator, and CLI crates.

pub mod config;
pub mod error;
pub mod tables;

pub use config::DbConfig;
pub use error::{Error, Result};
pub use tables::{TableSpec, DISPLAY_ORDER, TABLES, TRUNCATE_ORDER};
