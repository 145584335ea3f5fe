use anyhow::Result;
use clap::Parser;
use search_cli::{open_input, run, Cli};
use std::io::{self, Write};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let input = open_input(cli.input.as_deref())?;
    let output = run(&cli, input)?;

    io::stdout().lock().write_all(output.as_bytes())?;
    Ok(())
}
