use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Write};

use tyx_cli::args::CliArgs;

/// Exit status when at least one assertion failed.
const EXIT_ASSERTIONS_FAILED: i32 = 1;

fn main() -> Result<()> {
    // Zero cost unless TYX_LOG or RUST_LOG is set.
    tyx_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let outcome = tyx_cli::run(&args, &cwd, std::io::stdout().is_terminal())?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(outcome.output.as_bytes())
        .context("failed to write report")?;
    stdout.flush().context("failed to write report")?;

    if !outcome.success {
        std::process::exit(EXIT_ASSERTIONS_FAILED);
    }
    Ok(())
}
