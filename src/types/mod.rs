//! Shared types.

pub mod error;

pub use error::{DemoError, Result};
