use anyhow::{Context, Result};
use clef_parse::ArgvParser;
use clef_parse::env::Environment;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_logging();

    let env = Environment::new();
    let offset = env.argv_offset()?;
    let hints = env.hints()?;
    let args = std::env::args_os()
        .skip(offset)
        .map(|arg| arg.to_string_lossy().into_owned());

    let result = ArgvParser::new()
        .hints(&hints)
        .paths(&env)
        .parse(args)
        .context("failed to parse arguments")?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &result).context("failed to write result")?;
    writeln!(stdout)?;
    Ok(())
}

// stdout carries only the JSON result
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
