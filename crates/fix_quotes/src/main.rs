use anyhow::Result;
use clap::Parser;
use fix_quotes::{fix_text, init_logging, Cli, CONFIRMATION, TARGET_FILE};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    fix_text(Path::new(TARGET_FILE))?;

    println!("{}", CONFIRMATION);
    Ok(())
}
