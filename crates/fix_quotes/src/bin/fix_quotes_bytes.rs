use anyhow::Result;
use clap::Parser;
use fix_quotes::{fix_bytes, init_logging, Cli, CONFIRMATION, TARGET_FILE};
use std::path::Path;

// Byte-mode variant: use when `fix_quotes` fails with a UTF-8 decode error.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    fix_bytes(Path::new(TARGET_FILE))?;

    println!("{}", CONFIRMATION);
    Ok(())
}
