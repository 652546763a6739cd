use std::io::{self, Write};

use anyhow::{Context, Result};
use citer::demo::{self, DemoConfig, Part};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "citer", about = "Walkthrough of owning cursors and comparator trees")]
struct Cli {
    /// Disable ANSI colors.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one part of the walkthrough.
    Part {
        /// Part number (see `citer list`).
        number: usize,
        /// Values inserted into the tree in the getters part (comma separated).
        #[arg(long, value_delimiter = ',')]
        floats: Vec<f32>,
    },
    /// List the walkthrough parts and their descriptions.
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = DemoConfig::default().with_color(!cli.no_color);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Part { number, floats } => {
            run_part(number, config.with_floats(floats), &mut out)?
        }
        Commands::List => demo::list(&config, &mut out).context("failed to list parts")?,
    }

    out.flush()?;
    Ok(())
}

fn run_part(number: usize, config: DemoConfig, out: &mut impl Write) -> Result<()> {
    let part = Part::from_number(number)
        .with_context(|| "run `citer list` to see the available parts")?;
    demo::run(part, &config, out).with_context(|| format!("part {number} failed"))?;
    Ok(())
}
