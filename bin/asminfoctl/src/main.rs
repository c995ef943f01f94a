//! ---
//! asminfo_section: "04-cli"
//! asminfo_subsection: "binary"
//! asminfo_type: "source"
//! asminfo_scope: "code"
//! asminfo_description: "Command line front end for ThisAssembly generation."
//! asminfo_version: "v0.1.0"
//! asminfo_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::{bail, Result};
use asminfo_common::{init_tracing, GeneratorConfig, VersionInfo};
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

mod generate;
mod key_info;

#[derive(Debug, Parser)]
#[command(
    author,
    disable_version_flag = true,
    about = "Generate ThisAssembly version info sources for .NET projects",
    long_about = None
)]
struct Cli {
    #[arg(
        short = 'V',
        long = "version",
        action = ArgAction::SetTrue,
        help = "Print extended version information and exit"
    )]
    version: bool,
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        help = "Configuration file (defaults to $ASMINFO_CONFIG, then ./asminfo.toml)"
    )]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Render and write the ThisAssembly source file")]
    Generate(generate::GenerateArgs),
    #[command(about = "Print the public key and token of a strong-name key file")]
    KeyInfo(key_info::KeyInfoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.version {
        println!("{}", VersionInfo::current().extended());
        return Ok(());
    }
    let Some(command) = cli.command else {
        bail!("no command given; run with --help for usage");
    };

    let loaded = GeneratorConfig::load(cli.config.as_deref())?;
    let _log_guard = init_tracing(&loaded.config.logging)?;
    if let Some(source) = &loaded.source {
        debug!(config = %source.display(), "configuration loaded");
    }

    match command {
        Commands::Generate(args) => generate::run(args, loaded.config)?,
        Commands::KeyInfo(args) => key_info::run(&args)?,
    }
    Ok(())
}
