use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use storage_layout_compare::{Cli, LayoutTable, TableFormatter, compare};

fn run_cli(cli: Cli) -> Result<String> {
    let local = LayoutTable::load(&cli.local)
        .with_context(|| format!("Failed to load local layout: {}", cli.local.display()))?;
    let remote = LayoutTable::load(&cli.remote)
        .with_context(|| format!("Failed to load remote layout: {}", cli.remote.display()))?;
    log::info!("loaded {} local and {} remote storage variable(s)", local.len(), remote.len());

    let report = compare(&local, &remote);

    let no_color = std::env::var_os("NO_COLOR").is_some() || !std::io::stdout().is_terminal();
    Ok(TableFormatter::new(no_color).format(&report))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    print!("{}", run_cli(cli)?);
    Ok(())
}
