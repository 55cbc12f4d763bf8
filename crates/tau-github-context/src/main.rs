mod bootstrap_helpers;

use anyhow::{Context, Result};
use clap::Parser;
use tau_github_context::{parse_github_context, ProcessEnv};

use crate::bootstrap_helpers::init_tracing;

#[derive(Debug, Parser)]
#[command(
    name = "tau-github-context",
    about = "Print the canonical GitHub trigger context for the current workflow step",
    version
)]
struct Cli {
    #[arg(long, help = "Indent the emitted JSON")]
    pretty: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let context = parse_github_context(&ProcessEnv)?;
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&context)
    } else {
        serde_json::to_string(&context)
    }
    .context("failed to serialize github context")?;
    println!("{rendered}");
    Ok(())
}
