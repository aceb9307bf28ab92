//! SQL demo CLI
//!
//! Takes no arguments. Prints the confirmation line and exits.

use anyhow::{Context, Result};
use std::io;

fn main() -> Result<()> {
    // Logging is diagnostic only; stdout stays clean if it cannot be set up.
    if let Err(e) = sql_demo::logging::init() {
        eprintln!("warning: {e}");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    sql_demo::run(&mut out).context("Failed to write confirmation")?;

    Ok(())
}
