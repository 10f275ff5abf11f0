//! payroll-desk - interactive salary calculation desk.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use payroll_desk::cli::{Args, run_session};
use payroll_desk::config::ConfigLoader;
use payroll_desk::desk::PayrollDesk;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut loader = ConfigLoader::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(log) = args.log {
        loader = loader.with_log_path(log);
    }

    let mut desk = PayrollDesk::from_config(loader);
    let stdin = io::stdin();
    run_session(&mut desk, &mut stdin.lock(), &mut io::stdout())?;

    Ok(())
}
