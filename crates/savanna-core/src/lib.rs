//! Core types and utilities for the savanna predator/prey world simulator.

pub mod types;
pub mod species;
pub mod config;
pub mod error;
pub mod metrics;

pub use error::{Error, Result};
pub use types::*;
pub use species::*;
pub use config::*;
pub use metrics::*;
