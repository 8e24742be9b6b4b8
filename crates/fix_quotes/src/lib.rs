// crates/fix_quotes/src/lib.rs

//! The one-off fix for the broken quote escape in `dpd-api.js`.
//!
//! The generator emitted `.replace(/'/g, '‘’');` where `.replace(/'/g, ''');`
//! was intended. Two entry points apply the same fix: `fix_quotes` decodes the
//! file as UTF-8, `fix_quotes_bytes` patches the raw bytes and works even when
//! the file is not valid UTF-8.

use anyhow::{Context, Result};
use clap::Parser;
use literal_patch::{patch_byte_file, patch_text_file, PatchReport, PatternPair};
use log::debug;
use std::path::Path;

/// File patched by both binaries, relative to the working directory.
pub const TARGET_FILE: &str = "dpd-api.js";

/// Printed on stdout after a successful run.
pub const CONFIRMATION: &str = "Fixed";

/// Curly quotes between ASCII quotes, replaced with the intended `'''`.
pub const QUOTE_ESCAPE: PatternPair<'static> =
    PatternPair::literal(".replace(/'/g, '\u{2018}\u{2019}');", ".replace(/'/g, ''');");

/// Shared command line for both binaries. There is nothing to configure
/// beyond log verbosity.
#[derive(Debug, Parser)]
#[command(version, about = "Fixes the broken quote escape in dpd-api.js")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,
}

/// Initialises `env_logger`. `RUST_LOG` wins over `verbose`.
///
/// Call once per process; a second call panics.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
    debug!("default log filter: {}", default_filter);
}

/// Applies the quote fix to `path`, treating it as UTF-8 text.
pub fn fix_text(path: &Path) -> Result<PatchReport> {
    patch_text_file(path, &QUOTE_ESCAPE)
        .with_context(|| format!("Failed to fix quotes in {} (text mode)", path.display()))
}

/// Applies the quote fix to `path` as raw bytes.
pub fn fix_bytes(path: &Path) -> Result<PatchReport> {
    patch_byte_file(path, &QUOTE_ESCAPE.as_bytes())
        .with_context(|| format!("Failed to fix quotes in {} (byte mode)", path.display()))
}
