//! Leadbase CLI — lead extraction from saved company profile pages.
//!
//! Turns uploaded HTML profiles into deduplicated contact, company, and
//! pipeline records plus outreach drafts, bundled for download.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
