//! SQL demo - embeds a pre-formatted query and prints a confirmation line.
//!
//! The query in [`query::DEMO_QUERY`] is never parsed or rewritten.
//! [`run`] is the whole program: one line to the given sink.

pub mod logging;
pub mod query;
pub mod types;

use std::io::Write;
use tracing::debug;

pub use query::{CONFIRMATION, DEMO_QUERY};
pub use types::{DemoError, Result};

/// Write the confirmation line to `out` and flush it.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", CONFIRMATION)?;
    out.flush()?;
    debug!("confirmation written");
    Ok(())
}
