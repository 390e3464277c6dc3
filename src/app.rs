// src/app.rs
use crate::config::Config;
use crate::presentation;
use anyhow::{Context, Result};
use std::io::{self, Write};

/// Count the corpus and print the report to stdout.
///
/// Per-file lines are written as each file finishes, so a failure part-way
/// leaves the earlier lines in place. The total is only printed when every
/// file was counted.
pub fn run(config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let total = count_deps_engine::run_with(config, |file| {
        presentation::write_file_line(&mut out, file)?;
        Ok(())
    })
    .with_context(|| format!("failed to count *.{} in {}", config.corpus.ext, config.dir().display()))?;

    presentation::write_total(&mut out, &total)?;
    out.flush()?;
    log::info!("done: {} lines counted", total.lines());
    Ok(())
}
