use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use vfs_shell::{Shell, ShellConfig, logging};

/// Shell over a read-only virtual file system stored in a zip archive.
#[derive(Debug, Parser)]
#[command(name = "vsh", version, about)]
struct Cli {
    /// Path to the configuration file (INI, `[DEFAULT]` section)
    config: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = ShellConfig::load(&cli.config)?;
    info!(user = %config.username, host = %config.hostname, "starting shell");

    let archive = config.filesystem_path.display().to_string();
    let mut shell =
        Shell::open(config).with_context(|| format!("cannot load file system from {archive}"))?;

    shell.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
